//! Parcel item drafts and the volumetric dimension derivation.

use serde::{Deserialize, Serialize};

use crate::wire::RemoteItem;

/// Service type for a parcel item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    #[default]
    #[serde(rename = "IPX")]
    Ipx,
    #[serde(rename = "IDX")]
    Idx,
}

impl ItemType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ipx => "IPX",
            Self::Idx => "IDX",
        }
    }

    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "IPX" => Some(Self::Ipx),
            "IDX" => Some(Self::Idx),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ipx => Self::Idx,
            Self::Idx => Self::Ipx,
        }
    }
}

/// Who pays for the shipment. Unset until the user picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaidBy {
    Shipper,
    Consignee,
}

impl PaidBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shipper => "Shipper",
            Self::Consignee => "Consignee",
        }
    }

    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Shipper" => Some(Self::Shipper),
            "Consignee" => Some(Self::Consignee),
            _ => None,
        }
    }
}

/// Account type for billing. `Others` requires an account number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Cash,
    #[default]
    Others,
}

impl AccountType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Others => "Others",
        }
    }

    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Cash" => Some(Self::Cash),
            "Others" => Some(Self::Others),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Cash => Self::Others,
            Self::Others => Self::Cash,
        }
    }
}

/// Text fields of an item the user edits directly.
///
/// `dimension` is not here: it is derived, and the enumerated selectors
/// (`type`, `paid_by`, `ac`) mutate through their own typed setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Pcs,
    Weight,
    Height,
    Length,
    Width,
    Reference,
    Vat,
    Currency,
    AcNo,
    Price,
    Description,
}

impl ItemField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ItemField::Pcs => "PCS",
            ItemField::Weight => "Weight",
            ItemField::Height => "Height",
            ItemField::Length => "Length",
            ItemField::Width => "Width",
            ItemField::Reference => "Reference",
            ItemField::Vat => "VAT/EORI",
            ItemField::Currency => "Currency",
            ItemField::AcNo => "A/C No",
            ItemField::Price => "Price",
            ItemField::Description => "Description",
        }
    }
}

/// Compute the volumetric dimension from the three edge lengths.
///
/// `round((height * width * length) / 5000, 2dp)`, with blank or
/// non-numeric inputs contributing 0. Returned as the fixed two-decimal
/// string the form displays and submits.
#[must_use]
pub fn volumetric_dimension(height: &str, width: &str, length: &str) -> String {
    fn edge(value: &str) -> f64 {
        value.trim().parse::<f64>().unwrap_or(0.0)
    }
    format!("{:.2}", edge(height) * edge(width) * edge(length) / 5000.0)
}

/// One line item of a parcel. All measurements are free-form strings; the
/// form keeps them as typed, never rejects them at entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub pcs: String,
    pub weight: String,
    pub height: String,
    pub length: String,
    pub width: String,
    pub dimension: String,
    pub reference: String,
    pub vat: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub currency: String,
    #[serde(with = "crate::wire::opt_paid_by")]
    pub paid_by: Option<PaidBy>,
    pub ac: AccountType,
    pub ac_no: String,
    pub price: String,
    pub description: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            id: None,
            pcs: String::new(),
            weight: String::new(),
            height: String::new(),
            length: String::new(),
            width: String::new(),
            dimension: String::new(),
            reference: String::new(),
            vat: String::new(),
            item_type: ItemType::Ipx,
            currency: "USD".to_string(),
            paid_by: None,
            ac: AccountType::Others,
            ac_no: String::new(),
            price: String::new(),
            description: String::new(),
        }
    }
}

impl ItemDraft {
    /// Hydrate from a server payload.
    ///
    /// Absent scalars default to `""`, `type` to IPX, `currency` to USD and
    /// `ac` to Others, so a hydrated item can back a form field directly.
    /// The server-supplied `dimension` is trusted as-is; it is only
    /// recomputed once the user edits an edge length.
    #[must_use]
    pub fn from_remote(remote: RemoteItem) -> Self {
        Self {
            id: remote.id,
            pcs: remote.pcs.unwrap_or_default(),
            weight: remote.weight.unwrap_or_default(),
            height: remote.height.unwrap_or_default(),
            length: remote.length.unwrap_or_default(),
            width: remote.width.unwrap_or_default(),
            dimension: remote.dimension.unwrap_or_default(),
            reference: remote.reference.unwrap_or_default(),
            vat: remote.vat.unwrap_or_default(),
            item_type: remote
                .item_type
                .as_deref()
                .and_then(ItemType::from_wire)
                .unwrap_or_default(),
            currency: remote.currency.unwrap_or_else(|| "USD".to_string()),
            paid_by: remote.paid_by.as_deref().and_then(PaidBy::from_wire),
            ac: remote
                .ac
                .as_deref()
                .and_then(AccountType::from_wire)
                .unwrap_or_default(),
            ac_no: remote.ac_no.unwrap_or_default(),
            price: remote.price.unwrap_or_default(),
            description: remote.description.unwrap_or_default(),
        }
    }

    /// Apply a text-field mutation.
    ///
    /// Edits to height/width/length recompute `dimension` within the same
    /// call; no intermediate state with a stale derivation is observable.
    /// `pcs` keeps only digits.
    pub fn set(&mut self, field: ItemField, value: &str) {
        match field {
            ItemField::Pcs => {
                self.pcs = value.chars().filter(char::is_ascii_digit).collect();
            }
            ItemField::Weight => self.weight = value.to_string(),
            ItemField::Height => {
                self.height = value.to_string();
                self.recompute_dimension();
            }
            ItemField::Length => {
                self.length = value.to_string();
                self.recompute_dimension();
            }
            ItemField::Width => {
                self.width = value.to_string();
                self.recompute_dimension();
            }
            ItemField::Reference => self.reference = value.to_string(),
            ItemField::Vat => self.vat = value.to_string(),
            ItemField::Currency => self.currency = value.to_string(),
            ItemField::AcNo => self.ac_no = value.to_string(),
            ItemField::Price => self.price = value.to_string(),
            ItemField::Description => self.description = value.to_string(),
        }
    }

    #[must_use]
    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Pcs => &self.pcs,
            ItemField::Weight => &self.weight,
            ItemField::Height => &self.height,
            ItemField::Length => &self.length,
            ItemField::Width => &self.width,
            ItemField::Reference => &self.reference,
            ItemField::Vat => &self.vat,
            ItemField::Currency => &self.currency,
            ItemField::AcNo => &self.ac_no,
            ItemField::Price => &self.price,
            ItemField::Description => &self.description,
        }
    }

    fn recompute_dimension(&mut self) {
        self.dimension = volumetric_dimension(&self.height, &self.width, &self.length);
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountType, ItemDraft, ItemField, ItemType, volumetric_dimension};
    use crate::wire::RemoteItem;

    #[test]
    fn dimension_formula() {
        assert_eq!(volumetric_dimension("10", "20", "25"), "1.00");
        assert_eq!(volumetric_dimension("0", "20", "25"), "0.00");
        assert_eq!(volumetric_dimension("50", "40", "30"), "12.00");
    }

    #[test]
    fn dimension_treats_non_numeric_as_zero() {
        assert_eq!(volumetric_dimension("", "20", "25"), "0.00");
        assert_eq!(volumetric_dimension("abc", "20", "25"), "0.00");
    }

    #[test]
    fn edge_edit_recomputes_dimension() {
        let mut item = ItemDraft::default();
        item.set(ItemField::Height, "10");
        item.set(ItemField::Width, "20");
        assert_eq!(item.dimension, "0.00");
        item.set(ItemField::Length, "25");
        assert_eq!(item.dimension, "1.00");
    }

    #[test]
    fn non_edge_edit_leaves_dimension_alone() {
        let mut item = ItemDraft::default();
        item.set(ItemField::Height, "10");
        item.set(ItemField::Width, "20");
        item.set(ItemField::Length, "25");
        item.set(ItemField::Weight, "999");
        item.set(ItemField::Price, "42");
        assert_eq!(item.dimension, "1.00");
    }

    #[test]
    fn pcs_keeps_digits_only() {
        let mut item = ItemDraft::default();
        item.set(ItemField::Pcs, "1a2b3");
        assert_eq!(item.pcs, "123");
    }

    #[test]
    fn defaults_match_a_fresh_form() {
        let item = ItemDraft::default();
        assert_eq!(item.item_type, ItemType::Ipx);
        assert_eq!(item.currency, "USD");
        assert_eq!(item.ac, AccountType::Others);
        assert!(item.paid_by.is_none());
    }

    #[test]
    fn hydration_applies_enum_defaults() {
        let item = ItemDraft::from_remote(RemoteItem {
            id: Some(3),
            weight: Some("5".into()),
            dimension: Some("7.50".into()),
            ..RemoteItem::default()
        });
        assert_eq!(item.item_type, ItemType::Ipx);
        assert_eq!(item.currency, "USD");
        assert_eq!(item.ac, AccountType::Others);
        assert_eq!(item.pcs, "");
        // Server-supplied dimension is trusted until an edge is touched.
        assert_eq!(item.dimension, "7.50");
    }

    #[test]
    fn hydrated_dimension_recomputes_on_first_edge_edit() {
        let mut item = ItemDraft::from_remote(RemoteItem {
            height: Some("10".into()),
            width: Some("20".into()),
            length: Some("25".into()),
            dimension: Some("99.99".into()),
            ..RemoteItem::default()
        });
        item.set(ItemField::Height, "10");
        assert_eq!(item.dimension, "1.00");
    }

    #[test]
    fn serializes_with_wire_names() {
        let item = ItemDraft::default();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "IPX");
        assert_eq!(json["ac"], "Others");
        assert_eq!(json["paid_by"], "");
        assert!(json.get("id").is_none());
    }
}
