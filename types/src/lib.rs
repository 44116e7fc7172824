//! Core domain types for Waybill.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies: the parcel/address drafts the form screens edit, the typed
//! field identifiers they mutate through, and the wire payloads the API
//! client sends and receives.
//!
//! Two invariants the rest of the workspace leans on live here:
//!
//! - **Normalization happens in one place.** Every `from_remote` constructor
//!   is the single spot where absent server fields collapse to their
//!   defaults (`""`, [`ItemType::Ipx`], `"USD"`, [`AccountType::Others`]).
//!   A hydrated draft never carries a missing value.
//! - **Derived fields are never stale.** [`ItemDraft::set`] recomputes the
//!   volumetric `dimension` in the same call that changes any of
//!   height/width/length.

pub mod address;
pub mod item;
pub mod parcel;
pub mod party;
pub mod profile;
pub mod wire;

pub use address::{AddressBookEntry, AddressDraft, EntryKind};
pub use item::{AccountType, ItemDraft, ItemField, ItemType, PaidBy, volumetric_dimension};
pub use parcel::ParcelDraft;
pub use party::{PartyField, ReceiverDraft, SenderDraft};
pub use profile::{
    PasswordDraft, PasswordField, ProfileDraft, ProfileField, UpdateProfileRequest, UserProfile,
};
pub use wire::{
    ApiEnvelope, DashboardData, LoginResponse, ParcelPage, ParcelRequest, ParcelSummary,
    ProfileData, RemoteItem, RemoteParcel, RemoteParty, UploadPhotoResponse,
};
