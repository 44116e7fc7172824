//! The three-step parcel form wizard.
//!
//! `Sender -> Receiver -> Items`, accumulating one [`ParcelDraft`]. Forward
//! progress out of the sender step is gated in the create flow only; the
//! edit flow arrives with server data and moves freely. Going back is
//! always allowed and never touches the draft.

use chrono::{NaiveDate, NaiveTime};

use waybill_types::{ItemField, ParcelDraft, PartyField, RemoteParcel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    Sender,
    Receiver,
    Items,
}

impl FormStep {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            FormStep::Sender => "Sender",
            FormStep::Receiver => "Receiver",
            FormStep::Items => "Items",
        }
    }

    /// Position in the stepper, zero-based.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            FormStep::Sender => 0,
            FormStep::Receiver => 1,
            FormStep::Items => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { parcel_id: u64 },
}

/// Focusable inputs on the sender step: the eight contact fields plus the
/// pickup schedule, which the completeness gate ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderFocus {
    Contact(PartyField),
    PickupDate,
    PickupTime,
}

impl SenderFocus {
    pub const ORDER: [SenderFocus; 10] = [
        SenderFocus::Contact(PartyField::CompanyName),
        SenderFocus::Contact(PartyField::Name),
        SenderFocus::Contact(PartyField::Country),
        SenderFocus::Contact(PartyField::City),
        SenderFocus::Contact(PartyField::Address),
        SenderFocus::Contact(PartyField::PostalCode),
        SenderFocus::Contact(PartyField::Email),
        SenderFocus::Contact(PartyField::Contact),
        SenderFocus::PickupDate,
        SenderFocus::PickupTime,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SenderFocus::Contact(field) => field.label(),
            SenderFocus::PickupDate => "Pickup date",
            SenderFocus::PickupTime => "Pickup time",
        }
    }
}

/// Focusable inputs on the items step: text fields interleaved with the
/// three cycling selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFocus {
    Text(ItemField),
    ItemType,
    PaidBy,
    Account,
}

impl ItemFocus {
    pub const ORDER: [ItemFocus; 14] = [
        ItemFocus::Text(ItemField::Pcs),
        ItemFocus::Text(ItemField::Weight),
        ItemFocus::Text(ItemField::Height),
        ItemFocus::Text(ItemField::Length),
        ItemFocus::Text(ItemField::Width),
        ItemFocus::ItemType,
        ItemFocus::Text(ItemField::Reference),
        ItemFocus::Text(ItemField::Vat),
        ItemFocus::Text(ItemField::Currency),
        ItemFocus::PaidBy,
        ItemFocus::Account,
        ItemFocus::Text(ItemField::AcNo),
        ItemFocus::Text(ItemField::Price),
        ItemFocus::Text(ItemField::Description),
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ItemFocus::Text(field) => field.label(),
            ItemFocus::ItemType => "Type",
            ItemFocus::PaidBy => "Paid by",
            ItemFocus::Account => "Account",
        }
    }
}

#[derive(Debug)]
pub struct ParcelForm {
    pub mode: FormMode,
    pub step: FormStep,
    pub draft: ParcelDraft,
    pub sender_focus: usize,
    pub receiver_focus: usize,
    pub item_focus: usize,
    pub active_item: usize,
    /// Edit-flow hydration fetch still in flight.
    pub loading: bool,
    pub submitting: bool,
}

impl ParcelForm {
    #[must_use]
    pub fn new_create() -> Self {
        Self::with_mode(FormMode::Create, false)
    }

    /// The caller is responsible for spawning the hydration fetch.
    #[must_use]
    pub fn new_edit(parcel_id: u64) -> Self {
        Self::with_mode(FormMode::Edit { parcel_id }, true)
    }

    fn with_mode(mode: FormMode, loading: bool) -> Self {
        Self {
            mode,
            step: FormStep::Sender,
            draft: ParcelDraft::default(),
            sender_focus: 0,
            receiver_focus: 0,
            item_focus: 0,
            active_item: 0,
            loading,
            submitting: false,
        }
    }

    /// Replace the draft with normalized server data.
    pub fn hydrate(&mut self, remote: RemoteParcel) {
        self.draft = ParcelDraft::from_remote(remote);
        self.active_item = 0;
        self.loading = false;
    }

    /// Whether the Next action may leave the current step.
    ///
    /// Only the create flow gates on sender completeness; editing an
    /// existing parcel moves freely, matching the service's own behavior
    /// for records it already accepted.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.step {
            FormStep::Sender => match self.mode {
                FormMode::Create => self.draft.sender.is_complete(),
                FormMode::Edit { .. } => true,
            },
            FormStep::Receiver => true,
            FormStep::Items => false,
        }
    }

    /// Move forward one step. Inert when gated.
    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }
        self.step = match self.step {
            FormStep::Sender => FormStep::Receiver,
            FormStep::Receiver | FormStep::Items => FormStep::Items,
        };
    }

    /// Move back one step. Always allowed; the draft is untouched.
    pub fn retreat(&mut self) {
        self.step = match self.step {
            FormStep::Sender | FormStep::Receiver => FormStep::Sender,
            FormStep::Items => FormStep::Receiver,
        };
    }

    /// Submission is reachable only from the items step.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step == FormStep::Items && !self.submitting && !self.loading
    }

    // ------------------------------------------------------------------
    // Focus and editing
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        let (index, len) = self.focus_slot();
        *index = (*index + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let (index, len) = self.focus_slot();
        *index = (*index + len - 1) % len;
    }

    fn focus_slot(&mut self) -> (&mut usize, usize) {
        match self.step {
            FormStep::Sender => (&mut self.sender_focus, SenderFocus::ORDER.len()),
            FormStep::Receiver => (&mut self.receiver_focus, PartyField::ALL.len()),
            FormStep::Items => (&mut self.item_focus, ItemFocus::ORDER.len()),
        }
    }

    /// Append a character to the focused text field.
    ///
    /// Selector fields ignore typed characters; they change through
    /// [`ParcelForm::cycle_selector`].
    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.edit_focused(|current| {
            let mut next = current.to_string();
            next.push(c);
            next
        });
    }

    /// Delete the last character of the focused text field.
    pub fn pop_char(&mut self) {
        self.edit_focused(|current| {
            let mut next = current.to_string();
            next.pop();
            next
        });
    }

    fn edit_focused(&mut self, edit: impl Fn(&str) -> String) {
        match self.step {
            FormStep::Sender => match SenderFocus::ORDER[self.sender_focus] {
                SenderFocus::Contact(field) => {
                    let next = edit(self.draft.sender.get(field));
                    self.draft.sender.set(field, &next);
                }
                SenderFocus::PickupDate => {
                    self.draft.sender.pickup_request_date =
                        edit(&self.draft.sender.pickup_request_date);
                }
                SenderFocus::PickupTime => {
                    self.draft.sender.pickup_request_time =
                        edit(&self.draft.sender.pickup_request_time);
                }
            },
            FormStep::Receiver => {
                let field = PartyField::ALL[self.receiver_focus];
                let next = edit(self.draft.receiver.get(field));
                self.draft.receiver.set(field, &next);
            }
            FormStep::Items => {
                // A hydrated parcel can arrive with no items at all.
                if let ItemFocus::Text(field) = ItemFocus::ORDER[self.item_focus]
                    && let Some(item) = self.draft.items.get_mut(self.active_item)
                {
                    let next = edit(item.get(field));
                    item.set(field, &next);
                }
            }
        }
    }

    /// Cycle the focused selector to its next value. Inert on text fields.
    pub fn cycle_selector(&mut self) {
        if self.step != FormStep::Items {
            return;
        }
        let Some(item) = self.draft.items.get_mut(self.active_item) else {
            return;
        };
        match ItemFocus::ORDER[self.item_focus] {
            ItemFocus::ItemType => item.item_type = item.item_type.toggled(),
            ItemFocus::PaidBy => {
                item.paid_by = match item.paid_by {
                    None => Some(waybill_types::PaidBy::Shipper),
                    Some(waybill_types::PaidBy::Shipper) => {
                        Some(waybill_types::PaidBy::Consignee)
                    }
                    Some(waybill_types::PaidBy::Consignee) => None,
                };
            }
            ItemFocus::Account => item.ac = item.ac.toggled(),
            ItemFocus::Text(_) => {}
        }
    }

    // ------------------------------------------------------------------
    // Item management
    // ------------------------------------------------------------------

    pub fn add_item(&mut self) {
        self.draft.push_item();
        self.active_item = self.draft.items.len() - 1;
        self.item_focus = 0;
    }

    /// Remove the active item. At least one item always remains.
    pub fn remove_item(&mut self) {
        self.draft.remove_item(self.active_item);
        if self.active_item >= self.draft.items.len() {
            self.active_item = self.draft.items.len().saturating_sub(1);
        }
    }

    pub fn next_item(&mut self) {
        if self.active_item + 1 < self.draft.items.len() {
            self.active_item += 1;
        }
    }

    pub fn prev_item(&mut self) {
        self.active_item = self.active_item.saturating_sub(1);
    }

    /// Pickup date must be `YYYY-MM-DD` and time `HH:MM` when present.
    /// Blank is fine; the schedule is optional.
    #[must_use]
    pub fn pickup_schedule_valid(&self) -> bool {
        let date = self.draft.sender.pickup_request_date.trim();
        let time = self.draft.sender.pickup_request_time.trim();
        let date_ok = date.is_empty() || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok();
        let time_ok = time.is_empty() || NaiveTime::parse_from_str(time, "%H:%M").is_ok();
        date_ok && time_ok
    }
}

#[cfg(test)]
mod tests {
    use super::{FormMode, FormStep, ItemFocus, ParcelForm, SenderFocus};
    use waybill_types::{AccountType, ItemField, ItemType, PaidBy, PartyField, RemoteParcel};

    fn complete_sender(form: &mut ParcelForm) {
        for field in PartyField::ALL {
            form.draft.sender.set(field, "x");
        }
    }

    #[test]
    fn create_flow_gates_the_sender_step() {
        let mut form = ParcelForm::new_create();
        form.advance();
        assert_eq!(form.step, FormStep::Sender);

        complete_sender(&mut form);
        form.advance();
        assert_eq!(form.step, FormStep::Receiver);
    }

    #[test]
    fn edit_flow_is_ungated() {
        let mut form = ParcelForm::new_edit(7);
        assert_eq!(form.mode, FormMode::Edit { parcel_id: 7 });
        form.advance();
        assert_eq!(form.step, FormStep::Receiver);
        form.advance();
        assert_eq!(form.step, FormStep::Items);
    }

    #[test]
    fn receiver_step_advances_unconditionally() {
        let mut form = ParcelForm::new_create();
        complete_sender(&mut form);
        form.advance();
        form.advance();
        assert_eq!(form.step, FormStep::Items);
        assert!(form.can_submit());
    }

    #[test]
    fn retreat_is_always_allowed_and_never_mutates() {
        let mut form = ParcelForm::new_edit(1);
        form.advance();
        form.advance();
        form.draft.items[0].set(ItemField::Reference, "keep me");
        let before = format!("{:?}", form.draft);

        form.retreat();
        assert_eq!(form.step, FormStep::Receiver);
        form.retreat();
        assert_eq!(form.step, FormStep::Sender);
        form.retreat();
        assert_eq!(form.step, FormStep::Sender);

        assert_eq!(format!("{:?}", form.draft), before);
    }

    #[test]
    fn typing_into_an_edge_field_recomputes_dimension() {
        let mut form = ParcelForm::new_edit(1);
        form.advance();
        form.advance();
        form.item_focus = ItemFocus::ORDER
            .iter()
            .position(|f| *f == ItemFocus::Text(ItemField::Height))
            .unwrap();
        for c in "10".chars() {
            form.push_char(c);
        }
        form.item_focus = ItemFocus::ORDER
            .iter()
            .position(|f| *f == ItemFocus::Text(ItemField::Width))
            .unwrap();
        for c in "20".chars() {
            form.push_char(c);
        }
        form.item_focus = ItemFocus::ORDER
            .iter()
            .position(|f| *f == ItemFocus::Text(ItemField::Length))
            .unwrap();
        for c in "25".chars() {
            form.push_char(c);
        }
        assert_eq!(form.draft.items[0].dimension, "1.00");

        form.pop_char();
        assert_eq!(form.draft.items[0].dimension, "0.08");
    }

    #[test]
    fn selectors_cycle_through_typed_variants() {
        let mut form = ParcelForm::new_edit(1);
        form.advance();
        form.advance();

        form.item_focus = ItemFocus::ORDER
            .iter()
            .position(|f| *f == ItemFocus::ItemType)
            .unwrap();
        form.cycle_selector();
        assert_eq!(form.draft.items[0].item_type, ItemType::Idx);

        form.item_focus = ItemFocus::ORDER
            .iter()
            .position(|f| *f == ItemFocus::PaidBy)
            .unwrap();
        form.cycle_selector();
        assert_eq!(form.draft.items[0].paid_by, Some(PaidBy::Shipper));
        form.cycle_selector();
        assert_eq!(form.draft.items[0].paid_by, Some(PaidBy::Consignee));
        form.cycle_selector();
        assert_eq!(form.draft.items[0].paid_by, None);

        form.item_focus = ItemFocus::ORDER
            .iter()
            .position(|f| *f == ItemFocus::Account)
            .unwrap();
        form.cycle_selector();
        assert_eq!(form.draft.items[0].ac, AccountType::Cash);
    }

    #[test]
    fn removing_the_last_item_keeps_one() {
        let mut form = ParcelForm::new_create();
        form.add_item();
        assert_eq!(form.draft.items.len(), 2);
        assert_eq!(form.active_item, 1);

        form.remove_item();
        assert_eq!(form.draft.items.len(), 1);
        assert_eq!(form.active_item, 0);

        form.remove_item();
        assert_eq!(form.draft.items.len(), 1);
    }

    #[test]
    fn hydration_clears_loading_and_trusts_the_stored_dimension() {
        let mut form = ParcelForm::new_edit(9);
        assert!(form.loading);

        let remote: RemoteParcel = serde_json::from_value(serde_json::json!({
            "sender": { "company_name": "Acme" },
            "receiver": {},
            "parcel_items": [
                { "height": "10", "width": "10", "length": "10", "dimension": "9.99" }
            ]
        }))
        .unwrap();
        form.hydrate(remote);

        assert!(!form.loading);
        assert_eq!(form.draft.sender.company_name, "Acme");
        assert_eq!(form.draft.items[0].dimension, "9.99");
    }

    #[test]
    fn editing_tolerates_a_parcel_hydrated_without_items() {
        let mut form = ParcelForm::new_edit(3);
        form.hydrate(RemoteParcel::default());
        assert!(form.draft.items.is_empty());
        form.advance();
        form.advance();

        form.push_char('x');
        form.pop_char();
        form.cycle_selector();
        form.remove_item();
        assert!(form.draft.items.is_empty());

        form.add_item();
        assert_eq!(form.draft.items.len(), 1);
    }

    #[test]
    fn focus_wraps_within_each_step() {
        let mut form = ParcelForm::new_create();
        form.focus_prev();
        assert_eq!(form.sender_focus, SenderFocus::ORDER.len() - 1);
        form.focus_next();
        assert_eq!(form.sender_focus, 0);
    }

    #[test]
    fn pickup_schedule_validation() {
        let mut form = ParcelForm::new_create();
        assert!(form.pickup_schedule_valid());

        form.draft.sender.pickup_request_date = "2025-02-30".into();
        assert!(!form.pickup_schedule_valid());

        form.draft.sender.pickup_request_date = "2025-02-28".into();
        form.draft.sender.pickup_request_time = "14:30".into();
        assert!(form.pickup_schedule_valid());

        form.draft.sender.pickup_request_time = "25:00".into();
        assert!(!form.pickup_schedule_valid());
    }
}
