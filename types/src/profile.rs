//! The signed-in user's profile and the settings-screen drafts.

use serde::{Deserialize, Serialize};

use crate::wire::{ProfileData, scalar};

/// The profile attached to the session at login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "scalar")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub profile_photo: Option<String>,
}

/// Editable fields of the account tab, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Address,
    Country,
    City,
    PostalCode,
    Phone,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Address,
        ProfileField::Country,
        ProfileField::City,
        ProfileField::PostalCode,
        ProfileField::Phone,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Email",
            ProfileField::Address => "Address",
            ProfileField::Country => "Country",
            ProfileField::City => "City",
            ProfileField::PostalCode => "Postal Code",
            ProfileField::Phone => "Phone",
        }
    }
}

/// Account-tab draft. The server stores a single `name`; the form edits it
/// as first/last, split on the first space and re-joined (trimmed) on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}

impl ProfileDraft {
    /// Hydrate from the fetched profile, splitting `name` into first/last.
    #[must_use]
    pub fn from_remote(remote: ProfileData) -> Self {
        let name = remote.name.unwrap_or_default();
        let mut parts = name.split_whitespace();
        let first_name = parts.next().unwrap_or_default().to_string();
        let last_name = parts.collect::<Vec<_>>().join(" ");
        Self {
            first_name,
            last_name,
            email: remote.email.unwrap_or_default(),
            address: remote.address.unwrap_or_default(),
            country: remote.country.unwrap_or_default(),
            city: remote.city.unwrap_or_default(),
            postal_code: remote.postal_code.unwrap_or_default(),
            phone: remote.phone.unwrap_or_default(),
        }
    }

    /// The single `name` the update endpoint expects.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    #[must_use]
    pub fn to_request(&self) -> UpdateProfileRequest {
        UpdateProfileRequest {
            name: self.full_name(),
            email: self.email.clone(),
            address: self.address.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            phone: self.phone.clone(),
        }
    }

    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Address => &mut self.address,
            ProfileField::Country => &mut self.country,
            ProfileField::City => &mut self.city,
            ProfileField::PostalCode => &mut self.postal_code,
            ProfileField::Phone => &mut self.phone,
        }
    }

    #[must_use]
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Address => &self.address,
            ProfileField::Country => &self.country,
            ProfileField::City => &self.city,
            ProfileField::PostalCode => &self.postal_code,
            ProfileField::Phone => &self.phone,
        }
    }
}

/// Body of `customer/profile/update`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}

/// Fields of the security tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

impl PasswordField {
    pub const ALL: [PasswordField; 3] = [
        PasswordField::Current,
        PasswordField::New,
        PasswordField::Confirm,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PasswordField::Current => "Current Password",
            PasswordField::New => "New Password",
            PasswordField::Confirm => "Confirm Password",
        }
    }
}

/// Security-tab draft; cleared after a successful change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PasswordDraft {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl PasswordDraft {
    pub fn field_mut(&mut self, field: PasswordField) -> &mut String {
        match field {
            PasswordField::Current => &mut self.current_password,
            PasswordField::New => &mut self.password,
            PasswordField::Confirm => &mut self.password_confirmation,
        }
    }

    #[must_use]
    pub fn get(&self, field: PasswordField) -> &str {
        match field {
            PasswordField::Current => &self.current_password,
            PasswordField::New => &self.password,
            PasswordField::Confirm => &self.password_confirmation,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{PasswordDraft, PasswordField, ProfileDraft};
    use crate::wire::ProfileData;

    #[test]
    fn name_splits_on_first_space() {
        let draft = ProfileDraft::from_remote(ProfileData {
            name: Some("Ada Maria Lovelace".into()),
            ..ProfileData::default()
        });
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.last_name, "Maria Lovelace");
    }

    #[test]
    fn single_word_name_leaves_last_empty() {
        let draft = ProfileDraft::from_remote(ProfileData {
            name: Some("Ada".into()),
            ..ProfileData::default()
        });
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.last_name, "");
        assert_eq!(draft.full_name(), "Ada");
    }

    #[test]
    fn full_name_trims_when_first_missing() {
        let mut draft = ProfileDraft::default();
        draft.last_name = "Lovelace".into();
        assert_eq!(draft.full_name(), "Lovelace");
    }

    #[test]
    fn password_draft_clears_all_fields() {
        let mut draft = PasswordDraft::default();
        for field in PasswordField::ALL {
            *draft.field_mut(field) = "secret".into();
        }
        draft.clear();
        assert_eq!(draft, PasswordDraft::default());
    }
}
