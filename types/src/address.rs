//! Address book entries: reusable sender/receiver templates.

use serde::{Deserialize, Serialize};

use crate::party::PartyField;
use crate::wire::scalar;

/// Whether an address book entry is used on the sender or receiver side.
/// Independent of where the entry actually gets applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[default]
    Sender,
    Receiver,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sender => "Sender",
            Self::Receiver => "Receiver",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Sender => Self::Receiver,
            Self::Receiver => Self::Sender,
        }
    }
}

/// A persisted address book entry as the server returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressBookEntry {
    pub id: u64,
    #[serde(default, rename = "type")]
    pub kind: EntryKind,
    #[serde(default, deserialize_with = "scalar")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub contact: Option<String>,
}

/// The editable address form, also the create/update request body.
///
/// Serializes with the `type` discriminator the service expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressDraft {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub address: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub contact: String,
}

impl AddressDraft {
    /// Pre-populate the form from an existing entry for editing.
    #[must_use]
    pub fn from_entry(entry: &AddressBookEntry) -> Self {
        Self {
            kind: entry.kind,
            name: entry.name.clone().unwrap_or_default(),
            company_name: entry.company_name.clone().unwrap_or_default(),
            email: entry.email.clone().unwrap_or_default(),
            address: entry.address.clone().unwrap_or_default(),
            country: entry.country.clone().unwrap_or_default(),
            city: entry.city.clone().unwrap_or_default(),
            postal_code: entry.postal_code.clone().unwrap_or_default(),
            contact: entry.contact.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: PartyField, value: &str) {
        *self.field_mut(field) = value.to_string();
    }

    #[must_use]
    pub fn get(&self, field: PartyField) -> &str {
        match field {
            PartyField::CompanyName => &self.company_name,
            PartyField::Name => &self.name,
            PartyField::Country => &self.country,
            PartyField::City => &self.city,
            PartyField::Address => &self.address,
            PartyField::PostalCode => &self.postal_code,
            PartyField::Email => &self.email,
            PartyField::Contact => &self.contact,
        }
    }

    pub fn field_mut(&mut self, field: PartyField) -> &mut String {
        match field {
            PartyField::CompanyName => &mut self.company_name,
            PartyField::Name => &mut self.name,
            PartyField::Country => &mut self.country,
            PartyField::City => &mut self.city,
            PartyField::Address => &mut self.address,
            PartyField::PostalCode => &mut self.postal_code,
            PartyField::Email => &mut self.email,
            PartyField::Contact => &mut self.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressBookEntry, AddressDraft, EntryKind};

    #[test]
    fn kind_toggle_is_mutually_exclusive() {
        assert_eq!(EntryKind::Sender.toggled(), EntryKind::Receiver);
        assert_eq!(EntryKind::Receiver.toggled(), EntryKind::Sender);
    }

    #[test]
    fn entry_defaults_kind_to_sender() {
        let entry: AddressBookEntry = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::Sender);
        assert_eq!(entry.name, None);
    }

    #[test]
    fn draft_serializes_type_discriminator() {
        let mut draft = AddressDraft::default();
        draft.kind = EntryKind::Receiver;
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "Receiver");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn from_entry_fills_every_field() {
        let entry: AddressBookEntry = serde_json::from_str(
            r#"{"id": 9, "type": "Receiver", "name": "Jo", "company_name": "Acme"}"#,
        )
        .unwrap();
        let draft = AddressDraft::from_entry(&entry);
        assert_eq!(draft.kind, EntryKind::Receiver);
        assert_eq!(draft.name, "Jo");
        assert_eq!(draft.city, "");
    }
}
