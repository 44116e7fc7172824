//! Wire payloads exchanged with the shipping service.
//!
//! The service wraps most responses in a `{ status, data }` envelope where
//! `status` is a numeric business status (200 = success) independent of the
//! HTTP status. It is also loose with scalar types - numeric fields arrive
//! as JSON numbers or strings depending on the record - so everything
//! string-shaped deserializes through [`scalar`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::item::ItemDraft;
use crate::party::{ReceiverDraft, SenderDraft};

/// The standard `{ status, data }` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: u16,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Deserialize a JSON string, number, or bool into an optional string.
pub(crate) fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
        Null,
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None | Some(Raw::Null) => None,
        Some(Raw::Str(s)) => Some(s),
        Some(Raw::Int(n)) => Some(n.to_string()),
        Some(Raw::Float(n)) => Some(n.to_string()),
        Some(Raw::Bool(b)) => Some(b.to_string()),
    })
}

/// `paid_by` travels as `"Shipper"`, `"Consignee"`, or `""` when unset.
pub mod opt_paid_by {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::item::PaidBy;

    pub fn serialize<S>(value: &Option<PaidBy>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map(PaidBy::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PaidBy>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(PaidBy::from_wire))
    }
}

/// A sender or receiver as the server returns it: every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteParty {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "scalar")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub pickup_request_date: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub pickup_request_time: Option<String>,
}

/// A parcel item as the server returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "scalar")]
    pub pcs: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub width: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub dimension: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub vat: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "scalar")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub paid_by: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub ac: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub ac_no: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub description: Option<String>,
}

/// A full parcel fetched for edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteParcel {
    #[serde(default)]
    pub sender: Option<RemoteParty>,
    #[serde(default)]
    pub receiver: Option<RemoteParty>,
    #[serde(default)]
    pub parcel_items: Option<Vec<RemoteItem>>,
}

/// The create/update request body. The item sequence travels under the
/// `parcel_items` key; sender and receiver pass through unchanged.
#[derive(Debug, Serialize)]
pub struct ParcelRequest<'a> {
    pub sender: &'a SenderDraft,
    pub receiver: &'a ReceiverDraft,
    pub parcel_items: &'a [ItemDraft],
}

/// One row of the parcel list and the dashboard's recent shipments.
#[derive(Debug, Clone, Deserialize)]
pub struct ParcelSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "scalar")]
    pub air_way_bill: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub sender_company_name: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub receiver_company_name: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub weight: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "scalar")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub parcel_status: Option<String>,
}

/// Paged parcel listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParcelPage {
    #[serde(default)]
    pub records: Vec<ParcelSummary>,
}

/// Aggregated dashboard counters plus the recent-shipments table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub total_shipments: u64,
    #[serde(default)]
    pub pending_shipments: u64,
    #[serde(default)]
    pub delivered_shipments: u64,
    #[serde(default)]
    pub recent_shipments: Vec<ParcelSummary>,
}

/// Login is the one endpoint that does not use the standard envelope:
/// the token and profile sit beside `status` at the top level.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub status: u16,
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
    #[serde(default, rename = "userData")]
    pub user_data: Option<crate::profile::UserProfile>,
}

/// The editable profile record from `customer/profile`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileData {
    #[serde(default, deserialize_with = "scalar")]
    pub name: Option<String>,
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
    pub phone: Option<String>,
}

/// Response of the multipart profile-photo upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadPhotoResponse {
    pub status: u16,
    #[serde(default, deserialize_with = "scalar")]
    pub profile_photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{ApiEnvelope, ParcelRequest, RemoteItem, RemoteParcel};
    use crate::item::ItemDraft;
    use crate::parcel::ParcelDraft;

    #[test]
    fn envelope_success_is_exactly_200() {
        let ok: ApiEnvelope<()> = serde_json::from_str(r#"{"status":200}"#).unwrap();
        let rejected: ApiEnvelope<()> = serde_json::from_str(r#"{"status":422}"#).unwrap();
        assert!(ok.is_success());
        assert!(!rejected.is_success());
    }

    #[test]
    fn scalar_accepts_numbers_and_strings() {
        let item: RemoteItem =
            serde_json::from_str(r#"{"weight": 12.5, "price": "30", "pcs": 2}"#).unwrap();
        assert_eq!(item.weight.as_deref(), Some("12.5"));
        assert_eq!(item.price.as_deref(), Some("30"));
        assert_eq!(item.pcs.as_deref(), Some("2"));
    }

    #[test]
    fn parcel_request_names_the_item_list_parcel_items() {
        let draft = ParcelDraft::default();
        let request = ParcelRequest {
            sender: &draft.sender,
            receiver: &draft.receiver,
            parcel_items: &draft.items,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["parcel_items"].is_array());
        assert!(json.get("items").is_none());
        assert_eq!(json["parcel_items"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn remote_parcel_tolerates_sparse_payloads() {
        let parcel: RemoteParcel =
            serde_json::from_str(r#"{"sender": {"company_name": "Acme"}}"#).unwrap();
        assert!(parcel.receiver.is_none());
        assert!(parcel.parcel_items.is_none());
        assert_eq!(
            parcel.sender.unwrap().company_name.as_deref(),
            Some("Acme")
        );
    }

    #[test]
    fn item_round_trips_paid_by_empty_string() {
        let mut draft = ItemDraft::default();
        draft.paid_by = None;
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["paid_by"], "");

        let remote: RemoteItem = serde_json::from_value(json).unwrap();
        let back = ItemDraft::from_remote(remote);
        assert!(back.paid_by.is_none());
    }
}
