//! Application state machine for Waybill.
//!
//! The [`App`] owns every piece of mutable state: the active screen, one
//! state struct per screen, the session, and the notice queue. Network
//! calls run on spawned tokio tasks holding an `Arc` of the API client and
//! finish by posting an [`ApiEvent`]; [`App::tick`] drains those events on
//! the UI thread. Nothing here locks, and nothing here blocks.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use waybill_api::{ApiClient, ApiError, Session};
use waybill_types::PasswordDraft;

pub mod address_book;
pub mod dashboard;
pub mod events;
pub mod login;
pub mod notices;
pub mod parcel_form;
pub mod parcels;
pub mod profile;

pub use address_book::{AddressBook, AddressBookView, AddressForm};
pub use dashboard::DashboardState;
pub use events::{ApiEvent, EventReceiver, EventSender, PhotoError};
pub use login::{LoginField, LoginForm};
pub use notices::{Notice, NoticeKind, NoticeQueue};
pub use parcel_form::{FormMode, FormStep, ItemFocus, ParcelForm, SenderFocus};
pub use parcels::{FilterFocus, ParcelList};
pub use profile::{AccountFocus, ProfileScreen, ProfileTab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Parcels,
    ParcelForm,
    AddressBook,
    Profile,
}

pub struct App {
    pub screen: Screen,
    pub session: Option<Session>,
    pub notices: NoticeQueue,
    pub login: LoginForm,
    pub dashboard: DashboardState,
    pub parcels: ParcelList,
    pub parcel_form: Option<ParcelForm>,
    pub address_book: AddressBook,
    pub profile: ProfileScreen,
    pub should_quit: bool,
    base_url: String,
    events_tx: EventSender,
    events_rx: EventReceiver,
}

impl App {
    #[must_use]
    pub fn new(base_url: impl Into<String>, login_email: Option<&str>) -> Self {
        let (events_tx, events_rx) = tokio::sync::mpsc::unbounded_channel();
        Self {
            screen: Screen::Login,
            session: None,
            notices: NoticeQueue::new(),
            login: LoginForm::with_email(login_email),
            dashboard: DashboardState::default(),
            parcels: ParcelList::default(),
            parcel_form: None,
            address_book: AddressBook::default(),
            profile: ProfileScreen::default(),
            should_quit: false,
            base_url: base_url.into(),
            events_tx,
            events_rx,
        }
    }

    /// Drain finished API calls and expire stale notices. Called once per
    /// frame from the UI loop.
    pub fn tick(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
        self.notices.prune(Instant::now());
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn client(&self) -> Option<Arc<ApiClient>> {
        self.session.as_ref().map(Session::client)
    }

    // ------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------

    pub fn submit_login(&mut self) {
        if !self.login.can_submit() {
            return;
        }
        self.login.submitting = true;
        let base_url = self.base_url.clone();
        let email = self.login.email.trim().to_string();
        let password = self.login.password.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = Session::login(&base_url, &email, &password).await;
            let _ = tx.send(ApiEvent::LoginFinished(result));
        });
    }

    /// Drop the session and everything cached under it.
    pub fn logout(&mut self) {
        let email = self.login.email.clone();
        self.session = None;
        self.login = LoginForm::with_email(Some(&email));
        self.dashboard = DashboardState::default();
        self.parcels = ParcelList::default();
        self.parcel_form = None;
        self.address_book = AddressBook::default();
        self.profile = ProfileScreen::default();
        self.screen = Screen::Login;
        tracing::info!("logged out");
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn open_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
        self.refresh_dashboard();
    }

    pub fn open_parcels(&mut self) {
        self.screen = Screen::Parcels;
        self.refresh_parcels();
    }

    pub fn open_address_book(&mut self) {
        self.screen = Screen::AddressBook;
        self.address_book.close_modal();
        self.refresh_address_book();
    }

    pub fn open_profile(&mut self) {
        self.screen = Screen::Profile;
        self.refresh_profile();
    }

    pub fn open_create_parcel(&mut self) {
        self.parcel_form = Some(ParcelForm::new_create());
        self.screen = Screen::ParcelForm;
    }

    /// Open the edit form for the selected parcel and start hydration.
    pub fn open_edit_parcel(&mut self) {
        let Some(id) = self.parcels.selected_parcel().map(|p| p.id) else {
            return;
        };
        let Some(client) = self.client() else {
            return;
        };
        self.parcel_form = Some(ParcelForm::new_edit(id));
        self.screen = Screen::ParcelForm;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.get_parcel(id).await;
            let _ = tx.send(ApiEvent::ParcelFetched { id, result });
        });
    }

    /// Leave the form without submitting. The draft is discarded.
    pub fn close_parcel_form(&mut self) {
        self.parcel_form = None;
        self.screen = Screen::Parcels;
    }

    // ------------------------------------------------------------------
    // Fetches
    // ------------------------------------------------------------------

    pub fn refresh_dashboard(&mut self) {
        let Some(client) = self.client() else {
            return;
        };
        self.dashboard.begin_refresh();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(ApiEvent::DashboardLoaded(client.dashboard().await));
        });
    }

    pub fn refresh_parcels(&mut self) {
        if let Err(message) = self.parcels.validate_filter() {
            self.notices.error(message);
            return;
        }
        let Some(client) = self.client() else {
            return;
        };
        self.parcels.loading = true;
        let filter = self.parcels.filter.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(ApiEvent::ParcelsLoaded(client.list_parcels(&filter).await));
        });
    }

    pub fn refresh_address_book(&mut self) {
        let Some(client) = self.client() else {
            return;
        };
        self.address_book.loading = true;
        let query = self.address_book.query.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(ApiEvent::AddressBookLoaded(
                client.list_address_book(&query).await,
            ));
        });
    }

    pub fn refresh_profile(&mut self) {
        let Some(client) = self.client() else {
            return;
        };
        self.profile.loading = true;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(ApiEvent::ProfileLoaded(client.profile().await));
        });
    }

    // ------------------------------------------------------------------
    // Submissions
    // ------------------------------------------------------------------

    /// Submit the parcel form, creating or updating per its mode.
    pub fn submit_parcel(&mut self) {
        let Some(client) = self.client() else {
            return;
        };
        let Some(form) = self.parcel_form.as_mut() else {
            return;
        };
        if !form.can_submit() {
            return;
        }
        form.submitting = true;
        let mode = form.mode;
        let draft = form.draft.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = match mode {
                FormMode::Create => client.create_parcel(&draft).await,
                FormMode::Edit { parcel_id } => client.update_parcel(parcel_id, &draft).await,
            };
            let _ = tx.send(ApiEvent::ParcelSubmitted(result));
        });
    }

    /// Save the open address form: POST for new entries, PUT by id for
    /// existing ones.
    pub fn submit_address_form(&mut self) {
        let Some(client) = self.client() else {
            return;
        };
        if self.address_book.saving {
            return;
        }
        let AddressBookView::Form(form) = &self.address_book.view else {
            return;
        };
        self.address_book.saving = true;
        let entry_id = form.entry_id;
        let draft = form.draft.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = match entry_id {
                Some(id) => client.update_address(id, &draft).await,
                None => client.create_address(&draft).await,
            };
            let _ = tx.send(ApiEvent::AddressSaved(result));
        });
    }

    /// Fire the DELETE for an armed confirmation.
    pub fn confirm_delete_address(&mut self) {
        let Some(client) = self.client() else {
            return;
        };
        let AddressBookView::ConfirmDelete { id } = self.address_book.view else {
            return;
        };
        self.address_book.saving = true;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(ApiEvent::AddressDeleted(client.delete_address(id).await));
        });
    }

    pub fn save_profile(&mut self) {
        let Some(client) = self.client() else {
            return;
        };
        if self.profile.saving {
            return;
        }
        self.profile.saving = true;
        let request = self.profile.draft.to_request();
        let name = request.name.clone();
        let email = request.email.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.update_profile(&request).await;
            let _ = tx.send(ApiEvent::ProfileSaved {
                result,
                name,
                email,
            });
        });
    }

    pub fn change_password(&mut self) {
        let Some(client) = self.client() else {
            return;
        };
        if self.profile.saving {
            return;
        }
        self.profile.saving = true;
        let draft = self.profile.password.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(ApiEvent::PasswordChanged(
                client.change_password(&draft).await,
            ));
        });
    }

    /// Read the file named on the profile screen and upload it as the new
    /// profile photo.
    pub fn upload_photo(&mut self) {
        let path = self.profile.photo_path.trim().to_string();
        if path.is_empty() || self.profile.saving {
            return;
        }
        let Some(client) = self.client() else {
            return;
        };
        self.profile.saving = true;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let file_name = Path::new(&path)
                        .file_name()
                        .map_or_else(|| "photo.jpg".to_string(), |n| n.to_string_lossy().into_owned());
                    client
                        .upload_profile_photo(file_name, bytes)
                        .await
                        .map_err(PhotoError::Api)
                }
                Err(err) => Err(PhotoError::Read(err)),
            };
            let _ = tx.send(ApiEvent::PhotoUploaded(result));
        });
    }

    // ------------------------------------------------------------------
    // Event handling
    // ------------------------------------------------------------------

    fn handle_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::LoginFinished(Ok(session)) => {
                self.session = Some(session);
                self.login.reset_after_login();
                self.open_dashboard();
            }
            ApiEvent::LoginFinished(Err(err)) => {
                self.login.submitting = false;
                self.fail("Login failed", &err);
            }
            ApiEvent::DashboardLoaded(Ok(data)) => self.dashboard.apply(data),
            ApiEvent::DashboardLoaded(Err(err)) => {
                self.dashboard.fetch_failed();
                self.fail("Could not load dashboard", &err);
            }
            ApiEvent::ParcelsLoaded(Ok(page)) => self.parcels.set_records(page.records),
            ApiEvent::ParcelsLoaded(Err(err)) => {
                self.parcels.loading = false;
                self.fail("Could not load parcels", &err);
            }
            ApiEvent::ParcelFetched { id, result } => self.handle_parcel_fetched(id, result),
            ApiEvent::ParcelSubmitted(Ok(())) => {
                let updated = matches!(
                    self.parcel_form.as_ref().map(|f| f.mode),
                    Some(FormMode::Edit { .. })
                );
                self.notices.success(if updated {
                    "Parcel updated"
                } else {
                    "Parcel created"
                });
                self.close_parcel_form();
                self.refresh_parcels();
            }
            ApiEvent::ParcelSubmitted(Err(err)) => {
                if let Some(form) = self.parcel_form.as_mut() {
                    form.submitting = false;
                }
                self.fail("Could not save parcel", &err);
            }
            ApiEvent::AddressBookLoaded(Ok(entries)) => self.address_book.set_entries(entries),
            ApiEvent::AddressBookLoaded(Err(err)) => {
                self.address_book.loading = false;
                self.fail("Could not load address book", &err);
            }
            ApiEvent::AddressSaved(Ok(())) => {
                self.address_book.saving = false;
                self.address_book.close_modal();
                self.notices.success("Address saved");
                self.refresh_address_book();
            }
            ApiEvent::AddressSaved(Err(err)) => {
                self.address_book.saving = false;
                self.fail("Could not save address", &err);
            }
            ApiEvent::AddressDeleted(Ok(())) => {
                self.address_book.saving = false;
                self.address_book.close_modal();
                self.notices.success("Address deleted");
                self.refresh_address_book();
            }
            ApiEvent::AddressDeleted(Err(err)) => {
                self.address_book.saving = false;
                self.address_book.close_modal();
                self.fail("Could not delete address", &err);
            }
            ApiEvent::ProfileLoaded(Ok(data)) => self.profile.apply_loaded(data),
            ApiEvent::ProfileLoaded(Err(err)) => {
                self.profile.loading = false;
                self.fail("Could not load profile", &err);
            }
            ApiEvent::ProfileSaved { result: Ok(()), name, email } => {
                self.profile.saving = false;
                if let Some(session) = self.session.as_mut() {
                    let profile = session.profile_mut();
                    profile.name = Some(name);
                    profile.email = Some(email);
                }
                self.notices.success("Profile updated");
            }
            ApiEvent::ProfileSaved { result: Err(err), .. } => {
                self.profile.saving = false;
                self.fail("Could not update profile", &err);
            }
            ApiEvent::PasswordChanged(Ok(())) => {
                self.profile.password_changed();
                self.notices.success("Password changed");
            }
            ApiEvent::PasswordChanged(Err(err)) => {
                self.profile.saving = false;
                self.fail("Could not change password", &err);
            }
            ApiEvent::PhotoUploaded(Ok(url)) => {
                self.profile.saving = false;
                if let (Some(session), Some(url)) = (self.session.as_mut(), url) {
                    session.profile_mut().profile_photo = Some(url);
                }
                self.notices.success("Profile photo updated");
            }
            ApiEvent::PhotoUploaded(Err(err)) => {
                self.profile.saving = false;
                tracing::warn!(error = ?err, "photo upload failed");
                self.notices.error("Could not upload photo");
            }
        }
    }

    /// A hydration result only applies to the edit form that asked for it.
    fn handle_parcel_fetched(&mut self, id: u64, result: Result<waybill_types::RemoteParcel, ApiError>) {
        let Some(form) = self.parcel_form.as_mut() else {
            return;
        };
        if form.mode != (FormMode::Edit { parcel_id: id }) || !form.loading {
            return;
        }
        match result {
            Ok(remote) => form.hydrate(remote),
            Err(err) => {
                form.loading = false;
                self.fail("Could not load parcel", &err);
            }
        }
    }

    /// Uniform failure surface: one generic notice regardless of whether
    /// the transport, the HTTP layer, or the envelope failed. The real
    /// cause goes to the log.
    fn fail(&mut self, text: &str, err: &ApiError) {
        tracing::warn!(error = %err, "{text}");
        self.notices.error(text);
    }

    /// Clear the security draft when the user abandons the screen; password
    /// text never outlives the tab it was typed into.
    pub fn discard_password_draft(&mut self) {
        self.profile.password = PasswordDraft::default();
    }
}
