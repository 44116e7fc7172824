//! Login screen state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub submitting: bool,
}

impl LoginForm {
    #[must_use]
    pub fn with_email(email: Option<&str>) -> Self {
        Self {
            email: email.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.toggled();
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
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Both fields present and no submission already in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Drop the password once the session exists.
    pub fn reset_after_login(&mut self) {
        self.password.clear();
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginField, LoginForm};

    #[test]
    fn submit_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.can_submit());

        form.push_char('a');
        form.focus_next();
        assert_eq!(form.focus, LoginField::Password);
        form.push_char('p');
        assert!(form.can_submit());

        form.submitting = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn prefill_fills_email_only() {
        let form = LoginForm::with_email(Some("me@example.com"));
        assert_eq!(form.email, "me@example.com");
        assert_eq!(form.password, "");
    }

    #[test]
    fn reset_clears_the_password_but_keeps_the_email() {
        let mut form = LoginForm::with_email(Some("me@example.com"));
        form.focus_next();
        form.push_char('p');
        form.submitting = true;
        form.reset_after_login();
        assert_eq!(form.email, "me@example.com");
        assert_eq!(form.password, "");
        assert!(!form.submitting);
    }
}
