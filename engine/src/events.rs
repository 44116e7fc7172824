//! Outcomes of spawned API calls.
//!
//! Network tasks are fire-and-forget: each one finishes by posting exactly
//! one event here, and [`App::tick`](crate::App::tick) drains the channel on
//! the UI thread. There is no cancellation; a result for a screen the user
//! already left lands on the App-owned cache and nothing else.

use waybill_api::{ApiError, Session};
use waybill_types::{
    AddressBookEntry, DashboardData, ParcelPage, ProfileData, RemoteParcel,
};

pub type EventSender = tokio::sync::mpsc::UnboundedSender<ApiEvent>;
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<ApiEvent>;

#[derive(Debug)]
pub enum ApiEvent {
    LoginFinished(Result<Session, ApiError>),
    DashboardLoaded(Result<DashboardData, ApiError>),
    ParcelsLoaded(Result<ParcelPage, ApiError>),
    /// Hydration fetch for the edit form.
    ParcelFetched {
        id: u64,
        result: Result<RemoteParcel, ApiError>,
    },
    ParcelSubmitted(Result<(), ApiError>),
    AddressBookLoaded(Result<Vec<AddressBookEntry>, ApiError>),
    AddressSaved(Result<(), ApiError>),
    AddressDeleted(Result<(), ApiError>),
    ProfileLoaded(Result<ProfileData, ApiError>),
    /// Carries the submitted name and email so a success can update the
    /// session's cached profile without a second fetch.
    ProfileSaved {
        result: Result<(), ApiError>,
        name: String,
        email: String,
    },
    PasswordChanged(Result<(), ApiError>),
    PhotoUploaded(Result<Option<String>, PhotoError>),
}

/// Photo upload can fail before the network is ever touched.
#[derive(Debug)]
pub enum PhotoError {
    Read(std::io::Error),
    Api(ApiError),
}

impl std::fmt::Display for PhotoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoError::Read(err) => write!(f, "could not read photo file: {err}"),
            PhotoError::Api(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for PhotoError {}
