//! The composite parcel draft the three-step form accumulates.

use crate::item::ItemDraft;
use crate::party::{ReceiverDraft, SenderDraft};
use crate::wire::RemoteParcel;

/// A parcel under construction or edit: one sender, one receiver, and an
/// ordered sequence of at least one item.
///
/// A draft carries no parcel id of its own; the edit flow keeps the id in
/// the form mode and the sender/receiver/item ids ride along in the drafts.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelDraft {
    pub sender: SenderDraft,
    pub receiver: ReceiverDraft,
    pub items: Vec<ItemDraft>,
}

impl Default for ParcelDraft {
    /// An empty creation draft: blank parties and a single item carrying
    /// the form defaults (IPX / USD / Others).
    fn default() -> Self {
        Self {
            sender: SenderDraft::default(),
            receiver: ReceiverDraft::default(),
            items: vec![ItemDraft::default()],
        }
    }
}

impl ParcelDraft {
    /// Hydrate a draft from a fetched parcel, normalizing every section.
    ///
    /// Missing sections hydrate to their defaults, except the item list: a
    /// parcel the server returns without items keeps an empty list (the
    /// edit form renders what the server owns, it does not invent items).
    #[must_use]
    pub fn from_remote(remote: RemoteParcel) -> Self {
        Self {
            sender: SenderDraft::from_remote(remote.sender.unwrap_or_default()),
            receiver: ReceiverDraft::from_remote(remote.receiver.unwrap_or_default()),
            items: remote
                .parcel_items
                .unwrap_or_default()
                .into_iter()
                .map(ItemDraft::from_remote)
                .collect(),
        }
    }

    /// Append a fresh item with the form defaults.
    pub fn push_item(&mut self) {
        self.items.push(ItemDraft::default());
    }

    /// Remove the item at `index`, keeping at least one item in a creation
    /// draft. Returns whether anything was removed.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ParcelDraft;
    use crate::wire::{RemoteItem, RemoteParcel, RemoteParty};

    #[test]
    fn fresh_draft_has_one_default_item() {
        let draft = ParcelDraft::default();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].currency, "USD");
    }

    #[test]
    fn hydration_preserves_item_order() {
        let remote = RemoteParcel {
            sender: Some(RemoteParty::default()),
            receiver: Some(RemoteParty::default()),
            parcel_items: Some(vec![
                RemoteItem {
                    reference: Some("first".into()),
                    ..RemoteItem::default()
                },
                RemoteItem {
                    reference: Some("second".into()),
                    ..RemoteItem::default()
                },
            ]),
        };
        let draft = ParcelDraft::from_remote(remote);
        assert_eq!(draft.items[0].reference, "first");
        assert_eq!(draft.items[1].reference, "second");
    }

    #[test]
    fn hydration_tolerates_missing_sections() {
        let draft = ParcelDraft::from_remote(RemoteParcel {
            sender: None,
            receiver: None,
            parcel_items: None,
        });
        assert_eq!(draft.sender.company_name, "");
        assert!(draft.items.is_empty());
    }

    #[test]
    fn remove_item_keeps_last_one() {
        let mut draft = ParcelDraft::default();
        assert!(!draft.remove_item(0));
        draft.push_item();
        assert!(draft.remove_item(0));
        assert_eq!(draft.items.len(), 1);
    }
}
