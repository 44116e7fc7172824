//! Address book screen: filtered list, entry form, delete confirmation.

use waybill_types::{AddressBookEntry, AddressDraft, PartyField};

/// Form state for creating or editing one entry. `entry_id` is `Some` for
/// edits and picks PUT over POST on save.
#[derive(Debug)]
pub struct AddressForm {
    pub entry_id: Option<u64>,
    pub draft: AddressDraft,
    pub focus: usize,
}

impl AddressForm {
    /// Fields in focus order; the kind toggle sits first.
    pub const FIELDS: [PartyField; 8] = PartyField::ALL;

    #[must_use]
    pub fn create() -> Self {
        Self {
            entry_id: None,
            draft: AddressDraft::default(),
            focus: 0,
        }
    }

    #[must_use]
    pub fn edit(entry: &AddressBookEntry) -> Self {
        Self {
            entry_id: Some(entry.id),
            draft: AddressDraft::from_entry(entry),
            focus: 0,
        }
    }

    // Focus 0 is the kind toggle, 1..=8 the party fields.

    #[must_use]
    pub fn focused_field(&self) -> Option<PartyField> {
        if self.focus == 0 {
            None
        } else {
            Some(Self::FIELDS[self.focus - 1])
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (Self::FIELDS.len() + 1);
    }

    pub fn focus_prev(&mut self) {
        let len = Self::FIELDS.len() + 1;
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(field) = self.focused_field() {
            self.draft.field_mut(field).push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.focused_field() {
            self.draft.field_mut(field).pop();
        }
    }

    /// Toggle the entry kind when the kind selector is focused.
    pub fn toggle_kind(&mut self) {
        if self.focus == 0 {
            self.draft.kind = self.draft.kind.toggled();
        }
    }
}

/// What the address book screen is currently showing.
#[derive(Debug, Default)]
pub enum AddressBookView {
    #[default]
    List,
    Form(AddressForm),
    /// Deletion is armed; confirming issues the DELETE, anything else
    /// returns to the list.
    ConfirmDelete {
        id: u64,
    },
}

#[derive(Debug, Default)]
pub struct AddressBook {
    pub query: String,
    pub entries: Vec<AddressBookEntry>,
    pub selected: usize,
    pub view: AddressBookView,
    pub loading: bool,
    pub saving: bool,
}

impl AddressBook {
    pub fn set_entries(&mut self, entries: Vec<AddressBookEntry>) {
        self.entries = entries;
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
        self.loading = false;
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&AddressBookEntry> {
        self.entries.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn open_create(&mut self) {
        self.view = AddressBookView::Form(AddressForm::create());
    }

    /// Open the form pre-populated from the selected entry. Inert when the
    /// list is empty.
    pub fn open_edit(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.view = AddressBookView::Form(AddressForm::edit(entry));
        }
    }

    /// Arm deletion of the selected entry.
    pub fn request_delete(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.view = AddressBookView::ConfirmDelete { id: entry.id };
        }
    }

    /// Disarm whatever modal is open and show the list again.
    pub fn close_modal(&mut self) {
        self.view = AddressBookView::List;
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressBook, AddressBookView, AddressForm};
    use waybill_types::{AddressBookEntry, EntryKind, PartyField};

    fn entry(id: u64) -> AddressBookEntry {
        serde_json::from_value(serde_json::json!({ "id": id, "name": "Jo" })).unwrap()
    }

    #[test]
    fn delete_requires_an_armed_confirmation() {
        let mut book = AddressBook::default();
        book.request_delete();
        assert!(matches!(book.view, AddressBookView::List));

        book.set_entries(vec![entry(3)]);
        book.request_delete();
        assert!(matches!(book.view, AddressBookView::ConfirmDelete { id: 3 }));

        book.close_modal();
        assert!(matches!(book.view, AddressBookView::List));
    }

    #[test]
    fn edit_form_is_prepopulated_from_the_selected_entry() {
        let mut book = AddressBook::default();
        book.set_entries(vec![entry(1), entry(2)]);
        book.select_next();
        book.open_edit();

        let AddressBookView::Form(form) = &book.view else {
            panic!("expected the form view");
        };
        assert_eq!(form.entry_id, Some(2));
        assert_eq!(form.draft.name, "Jo");
    }

    #[test]
    fn kind_toggles_only_when_the_selector_is_focused() {
        let mut form = AddressForm::create();
        form.toggle_kind();
        assert_eq!(form.draft.kind, EntryKind::Receiver);

        form.focus_next();
        assert_eq!(form.focused_field(), Some(PartyField::CompanyName));
        form.toggle_kind();
        assert_eq!(form.draft.kind, EntryKind::Receiver);

        form.push_char('A');
        assert_eq!(form.draft.company_name, "A");
    }

    #[test]
    fn typing_on_the_kind_selector_is_inert() {
        let mut form = AddressForm::create();
        form.push_char('x');
        assert_eq!(form.draft.company_name, "");
        assert_eq!(form.draft.name, "");
    }
}
