//! Profile settings screen: account and security tabs plus photo upload.

use waybill_types::{PasswordDraft, PasswordField, ProfileData, ProfileDraft, ProfileField};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Account,
    Security,
}

impl ProfileTab {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            ProfileTab::Account => "Account",
            ProfileTab::Security => "Security",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            ProfileTab::Account => ProfileTab::Security,
            ProfileTab::Security => ProfileTab::Account,
        }
    }
}

/// Focusable inputs on the account tab: the eight profile fields followed
/// by the photo path input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFocus {
    Field(ProfileField),
    PhotoPath,
}

impl AccountFocus {
    pub const LEN: usize = ProfileField::ALL.len() + 1;

    #[must_use]
    pub fn at(index: usize) -> Self {
        ProfileField::ALL
            .get(index)
            .copied()
            .map_or(AccountFocus::PhotoPath, AccountFocus::Field)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AccountFocus::Field(field) => field.label(),
            AccountFocus::PhotoPath => "Photo file",
        }
    }
}

#[derive(Debug, Default)]
pub struct ProfileScreen {
    pub tab: ProfileTab,
    pub draft: ProfileDraft,
    pub password: PasswordDraft,
    /// Local path of an image to upload as the profile photo.
    pub photo_path: String,
    pub account_focus: usize,
    pub security_focus: usize,
    pub loading: bool,
    pub saving: bool,
}

impl ProfileScreen {
    pub fn apply_loaded(&mut self, data: ProfileData) {
        self.draft = ProfileDraft::from_remote(data);
        self.loading = false;
    }

    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggled();
    }

    #[must_use]
    pub fn account_focus(&self) -> AccountFocus {
        AccountFocus::at(self.account_focus)
    }

    #[must_use]
    pub fn security_focus(&self) -> PasswordField {
        PasswordField::ALL[self.security_focus]
    }

    pub fn focus_next(&mut self) {
        match self.tab {
            ProfileTab::Account => {
                self.account_focus = (self.account_focus + 1) % AccountFocus::LEN;
            }
            ProfileTab::Security => {
                self.security_focus = (self.security_focus + 1) % PasswordField::ALL.len();
            }
        }
    }

    pub fn focus_prev(&mut self) {
        match self.tab {
            ProfileTab::Account => {
                self.account_focus =
                    (self.account_focus + AccountFocus::LEN - 1) % AccountFocus::LEN;
            }
            ProfileTab::Security => {
                let len = PasswordField::ALL.len();
                self.security_focus = (self.security_focus + len - 1) % len;
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.focused_value_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_value_mut().pop();
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.tab {
            ProfileTab::Account => match AccountFocus::at(self.account_focus) {
                AccountFocus::Field(field) => self.draft.field_mut(field),
                AccountFocus::PhotoPath => &mut self.photo_path,
            },
            ProfileTab::Security => self.password.field_mut(PasswordField::ALL[self.security_focus]),
        }
    }

    /// A password change went through; the draft must not linger.
    pub fn password_changed(&mut self) {
        self.password.clear();
        self.saving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountFocus, ProfileScreen, ProfileTab};
    use waybill_types::{PasswordDraft, ProfileData, ProfileField};

    #[test]
    fn account_tab_edits_the_profile_draft() {
        let mut screen = ProfileScreen::default();
        screen.push_char('A');
        assert_eq!(screen.draft.first_name, "A");

        screen.focus_next();
        screen.push_char('B');
        assert_eq!(screen.draft.last_name, "B");
    }

    #[test]
    fn security_tab_edits_the_password_draft() {
        let mut screen = ProfileScreen::default();
        screen.toggle_tab();
        assert_eq!(screen.tab, ProfileTab::Security);

        screen.push_char('s');
        assert_eq!(screen.password.current_password, "s");
        assert_eq!(screen.draft.first_name, "");
    }

    #[test]
    fn successful_password_change_clears_the_draft() {
        let mut screen = ProfileScreen::default();
        screen.toggle_tab();
        for c in "old".chars() {
            screen.push_char(c);
        }
        screen.saving = true;
        screen.password_changed();
        assert_eq!(screen.password, PasswordDraft::default());
        assert!(!screen.saving);
    }

    #[test]
    fn photo_path_sits_after_the_profile_fields() {
        let mut screen = ProfileScreen::default();
        for _ in 0..ProfileField::ALL.len() {
            screen.focus_next();
        }
        assert_eq!(screen.account_focus(), AccountFocus::PhotoPath);
        screen.push_char('/');
        assert_eq!(screen.photo_path, "/");
    }

    #[test]
    fn loading_a_profile_splits_the_name() {
        let mut screen = ProfileScreen::default();
        screen.loading = true;
        screen.apply_loaded(ProfileData {
            name: Some("Grace Hopper".into()),
            ..ProfileData::default()
        });
        assert!(!screen.loading);
        assert_eq!(screen.draft.first_name, "Grace");
        assert_eq!(screen.draft.last_name, "Hopper");
    }
}
