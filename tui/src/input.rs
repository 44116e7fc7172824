//! Keyboard routing: one entry point per key event, dispatched per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use waybill_engine::{AddressBookView, App, FormStep, Screen};

/// Apply one key event to the app. Release/repeat events are ignored.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        handle_ctrl(app, key.code);
        return;
    }

    match app.screen {
        Screen::Login => handle_login(app, key.code),
        Screen::Dashboard => {}
        Screen::Parcels => handle_parcels(app, key.code),
        Screen::ParcelForm => handle_parcel_form(app, key.code),
        Screen::AddressBook => handle_address_book(app, key.code),
        Screen::Profile => handle_profile(app, key.code),
    }
}

/// Control chords work everywhere a session exists; `Ctrl-C` always quits.
fn handle_ctrl(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('c') => app.quit(),
        _ if app.session.is_none() => {}
        KeyCode::Char('d') => {
            leave_profile(app);
            app.open_dashboard();
        }
        KeyCode::Char('p') => {
            leave_profile(app);
            app.open_parcels();
        }
        KeyCode::Char('b') => {
            leave_profile(app);
            app.open_address_book();
        }
        KeyCode::Char('o') => app.open_profile(),
        KeyCode::Char('l') => app.logout(),
        KeyCode::Char('r') if app.screen == Screen::Dashboard => app.refresh_dashboard(),
        KeyCode::Char('n') => match app.screen {
            Screen::Dashboard | Screen::Parcels => app.open_create_parcel(),
            Screen::AddressBook => app.address_book.open_create(),
            _ => {}
        },
        KeyCode::Char('e') => match app.screen {
            Screen::Parcels => app.open_edit_parcel(),
            Screen::AddressBook => app.address_book.open_edit(),
            _ => {}
        },
        KeyCode::Char('t') if app.screen == Screen::ParcelForm => {
            if let Some(form) = form_on_items(app) {
                form.add_item();
            }
        }
        KeyCode::Char('x') if app.screen == Screen::ParcelForm => {
            if let Some(form) = form_on_items(app) {
                form.remove_item();
            }
        }
        _ => {}
    }
}

/// Password drafts do not survive leaving the profile screen.
fn leave_profile(app: &mut App) {
    if app.screen == Screen::Profile {
        app.discard_password_draft();
    }
}

fn form_on_items(app: &mut App) -> Option<&mut waybill_engine::ParcelForm> {
    app.parcel_form
        .as_mut()
        .filter(|form| form.step == FormStep::Items)
}

fn handle_login(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.login.focus_next(),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Esc => app.quit(),
        KeyCode::Backspace => app.login.pop_char(),
        KeyCode::Char(c) => app.login.push_char(c),
        _ => {}
    }
}

fn handle_parcels(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Tab => app.parcels.focus_next(),
        KeyCode::BackTab => app.parcels.focus_prev(),
        KeyCode::Enter => app.refresh_parcels(),
        KeyCode::Up => app.parcels.select_prev(),
        KeyCode::Down => app.parcels.select_next(),
        KeyCode::Backspace => {
            app.parcels.focused_value_mut().pop();
        }
        KeyCode::Char(c) if !c.is_control() => app.parcels.focused_value_mut().push(c),
        _ => {}
    }
}

fn handle_parcel_form(app: &mut App, code: KeyCode) {
    let Some(step) = app.parcel_form.as_ref().map(|form| form.step) else {
        return;
    };

    // Enter and Esc can leave the form entirely, so they route through the
    // App rather than the form itself.
    match code {
        KeyCode::Enter if step == FormStep::Items => {
            app.submit_parcel();
            return;
        }
        KeyCode::Esc if step == FormStep::Sender => {
            app.close_parcel_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.parcel_form.as_mut() else {
        return;
    };
    match code {
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_prev(),
        KeyCode::Enter => form.advance(),
        KeyCode::Esc => form.retreat(),
        KeyCode::PageUp => form.prev_item(),
        KeyCode::PageDown => form.next_item(),
        KeyCode::Backspace => form.pop_char(),
        // Space lands on whichever the focus is: it cycles a selector or
        // types into a text field, never both.
        KeyCode::Char(' ') => {
            form.cycle_selector();
            form.push_char(' ');
        }
        KeyCode::Char(c) => form.push_char(c),
        _ => {}
    }
}

fn handle_address_book(app: &mut App, code: KeyCode) {
    if matches!(app.address_book.view, AddressBookView::Form(_)) {
        handle_address_form(app, code);
        return;
    }
    if matches!(app.address_book.view, AddressBookView::ConfirmDelete { .. }) {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete_address(),
            _ => app.address_book.close_modal(),
        }
        return;
    }
    match code {
        KeyCode::Enter => app.refresh_address_book(),
        KeyCode::Up => app.address_book.select_prev(),
        KeyCode::Down => app.address_book.select_next(),
        KeyCode::Delete => app.address_book.request_delete(),
        KeyCode::Backspace => {
            app.address_book.query.pop();
        }
        KeyCode::Char(c) if !c.is_control() => app.address_book.query.push(c),
        _ => {}
    }
}

fn handle_address_form(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => {
            app.submit_address_form();
            return;
        }
        KeyCode::Esc => {
            app.address_book.close_modal();
            return;
        }
        _ => {}
    }
    let AddressBookView::Form(form) = &mut app.address_book.view else {
        return;
    };
    match code {
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_prev(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(' ') => {
            form.toggle_kind();
            form.push_char(' ');
        }
        KeyCode::Char(c) => form.push_char(c),
        _ => {}
    }
}

fn handle_profile(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Tab => app.profile.focus_next(),
        KeyCode::BackTab => app.profile.focus_prev(),
        KeyCode::Left | KeyCode::Right => app.profile.toggle_tab(),
        KeyCode::Enter => match app.profile.tab {
            waybill_engine::ProfileTab::Account => {
                if app.profile.account_focus() == waybill_engine::AccountFocus::PhotoPath {
                    app.upload_photo();
                } else {
                    app.save_profile();
                }
            }
            waybill_engine::ProfileTab::Security => app.change_password(),
        },
        KeyCode::Backspace => app.profile.pop_char(),
        KeyCode::Char(c) => app.profile.push_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::handle_key;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use waybill_engine::{App, Screen};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_fills_the_login_form() {
        let mut app = App::new("http://localhost:1", None);
        for c in "a@b.c".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('p')));
        assert_eq!(app.login.email, "a@b.c");
        assert_eq!(app.login.password, "p");
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = App::new("http://localhost:1", None);
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn nav_chords_require_a_session() {
        let mut app = App::new("http://localhost:1", None);
        handle_key(&mut app, ctrl('d'));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new("http://localhost:1", None);
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.login.email, "");
    }
}
