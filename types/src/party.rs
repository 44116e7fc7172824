//! Sender and receiver drafts for the parcel form and address book.

use serde::Serialize;

use crate::wire::RemoteParty;

/// Field identifier for the eight contact fields shared by senders,
/// receivers, and address-book entries.
///
/// Mutations are tagged with this enum rather than a bare string so a typo
/// in a field name is a compile error, not a silently dropped keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyField {
    CompanyName,
    Name,
    Country,
    City,
    Address,
    PostalCode,
    Email,
    Contact,
}

impl PartyField {
    /// All contact fields, in form order.
    pub const ALL: [PartyField; 8] = [
        PartyField::CompanyName,
        PartyField::Name,
        PartyField::Country,
        PartyField::City,
        PartyField::Address,
        PartyField::PostalCode,
        PartyField::Email,
        PartyField::Contact,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PartyField::CompanyName => "Company Name",
            PartyField::Name => "Name",
            PartyField::Country => "Country",
            PartyField::City => "City",
            PartyField::Address => "Address",
            PartyField::PostalCode => "Postal Code",
            PartyField::Email => "Email",
            PartyField::Contact => "Contact",
        }
    }
}

/// The sender side of a parcel, including the requested pickup slot.
///
/// Pickup date/time are textual (`YYYY-MM-DD`, `HH:MM`); the engine owns
/// their normalization. They are deliberately *not* part of
/// [`SenderDraft::is_complete`] - the sender gate covers only the eight
/// contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SenderDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub company_name: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    pub email: String,
    pub contact: String,
    pub pickup_request_date: String,
    pub pickup_request_time: String,
}

impl SenderDraft {
    /// Hydrate from a server payload, defaulting every absent field to `""`.
    #[must_use]
    pub fn from_remote(remote: RemoteParty) -> Self {
        Self {
            id: remote.id,
            company_name: remote.company_name.unwrap_or_default(),
            name: remote.name.unwrap_or_default(),
            country: remote.country.unwrap_or_default(),
            city: remote.city.unwrap_or_default(),
            address: remote.address.unwrap_or_default(),
            postal_code: remote.postal_code.unwrap_or_default(),
            email: remote.email.unwrap_or_default(),
            contact: remote.contact.unwrap_or_default(),
            pickup_request_date: remote.pickup_request_date.unwrap_or_default(),
            pickup_request_time: remote.pickup_request_time.unwrap_or_default(),
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

    /// The sender gate: every contact field non-empty after trimming.
    ///
    /// Pickup date/time do not participate; a sender with a blank pickup
    /// slot still passes.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        PartyField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }
}

/// The receiver side of a parcel. Same contact fields as the sender,
/// no pickup slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReceiverDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub company_name: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    pub email: String,
    pub contact: String,
}

impl ReceiverDraft {
    /// Hydrate from a server payload, defaulting every absent field to `""`.
    #[must_use]
    pub fn from_remote(remote: RemoteParty) -> Self {
        Self {
            id: remote.id,
            company_name: remote.company_name.unwrap_or_default(),
            name: remote.name.unwrap_or_default(),
            country: remote.country.unwrap_or_default(),
            city: remote.city.unwrap_or_default(),
            address: remote.address.unwrap_or_default(),
            postal_code: remote.postal_code.unwrap_or_default(),
            email: remote.email.unwrap_or_default(),
            contact: remote.contact.unwrap_or_default(),
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
    use super::{PartyField, ReceiverDraft, SenderDraft};
    use crate::wire::RemoteParty;

    fn complete_sender() -> SenderDraft {
        let mut sender = SenderDraft::default();
        sender.set(PartyField::CompanyName, "Acme");
        sender.set(PartyField::Name, "Jo");
        sender.set(PartyField::Country, "US");
        sender.set(PartyField::City, "NY");
        sender.set(PartyField::Address, "1 Rd");
        sender.set(PartyField::PostalCode, "10001");
        sender.set(PartyField::Email, "a@a.com");
        sender.set(PartyField::Contact, "555");
        sender
    }

    #[test]
    fn gate_passes_with_all_contact_fields_filled() {
        assert!(complete_sender().is_complete());
    }

    #[test]
    fn gate_ignores_pickup_slot() {
        let mut sender = complete_sender();
        sender.pickup_request_date = String::new();
        sender.pickup_request_time = String::new();
        assert!(sender.is_complete());
    }

    #[test]
    fn gate_rejects_whitespace_only_field() {
        for field in PartyField::ALL {
            let mut sender = complete_sender();
            sender.set(field, "   ");
            assert!(!sender.is_complete(), "{field:?} should gate");
        }
    }

    #[test]
    fn hydration_defaults_absent_fields_to_empty() {
        let sender = SenderDraft::from_remote(RemoteParty {
            id: Some(7),
            company_name: Some("Acme".into()),
            ..RemoteParty::default()
        });
        assert_eq!(sender.id, Some(7));
        assert_eq!(sender.company_name, "Acme");
        assert_eq!(sender.name, "");
        assert_eq!(sender.pickup_request_date, "");
    }

    #[test]
    fn receiver_serializes_without_pickup_fields() {
        let receiver = ReceiverDraft::default();
        let json = serde_json::to_value(&receiver).unwrap();
        assert!(json.get("pickup_request_date").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["company_name"], "");
    }
}
