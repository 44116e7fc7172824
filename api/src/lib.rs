//! REST client for the Waybill shipping service.
//!
//! # Architecture
//!
//! - [`Session`] - the logged-in state: an [`ApiClient`] plus the user's
//!   profile. Constructed by [`Session::login`], torn down by dropping it.
//!   There is no ambient token; everything that calls the service holds the
//!   session (or a clone of its client) explicitly.
//! - [`ApiClient`] - one method per service endpoint. Every request carries
//!   `Authorization: Bearer <token>`; JSON bodies carry
//!   `Content-Type: application/json`; the photo upload is multipart.
//! - [`ApiError`] - the error taxonomy. Transport failures, non-2xx HTTP
//!   statuses, and 2xx responses whose envelope `status` is not 200 are
//!   distinct variants so logs and tests can tell them apart, even though
//!   the UI reports them identically.
//!
//! # Response envelope
//!
//! The service wraps responses in `{ "status": <business status>, "data":
//! ... }` where 200 signals success regardless of the HTTP status line.
//! This convention is a collaborator contract, not negotiable client-side.
//!
//! There are no retries: every call is a single attempt, and a failed call
//! leaves whatever the user typed intact for them to resubmit.

mod client;
mod error;
mod session;

pub use client::{ApiClient, ParcelFilter};
pub use error::ApiError;
pub use session::{AuthToken, Session};

/// Base URL of the production service, overridable through configuration.
pub const DEFAULT_BASE_URL: &str = "http://63.250.40.59:7080/api/v1";

/// Relative endpoint paths, one per service operation.
pub mod endpoints {
    pub const LOGIN: &str = "customer/login";
    pub const DASHBOARD: &str = "customer/dashboard-data";
    pub const PARCELS: &str = "customer/parcel";
    pub const PARCEL_CREATE: &str = "customer/parcel/create";
    pub const ADDRESS_BOOK: &str = "customer/address-book";
    pub const PROFILE: &str = "customer/profile";
    pub const PROFILE_UPDATE: &str = "customer/profile/update";
    pub const CHANGE_PASSWORD: &str = "customer/change-password";
    pub const UPLOAD_PROFILE_PHOTO: &str = "customer/profile/upload-profile-photo";

    #[must_use]
    pub fn parcel(id: u64) -> String {
        format!("{PARCELS}/{id}")
    }

    #[must_use]
    pub fn parcel_update(id: u64) -> String {
        format!("customer/parcel/update/{id}")
    }

    #[must_use]
    pub fn address_book_entry(id: u64) -> String {
        format!("{ADDRESS_BOOK}/{id}")
    }
}
