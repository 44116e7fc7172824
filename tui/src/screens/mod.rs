//! Per-screen rendering.

pub mod address_book;
pub mod dashboard;
pub mod login;
pub mod parcel_form;
pub mod parcels;
pub mod profile;
