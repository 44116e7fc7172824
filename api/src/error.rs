//! Error taxonomy for service calls.

use reqwest::StatusCode;

/// What went wrong with a service call.
///
/// The screens surface every variant as the same generic failure notice and
/// keep the user's draft intact; the split exists for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, timeout, or body-decoding failure in the transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP status line itself was not a success.
    #[error("HTTP error: {status}")]
    Http { status: StatusCode },

    /// Transport succeeded but the response envelope's business status was
    /// not 200.
    #[error("service rejected the request (status {status})")]
    Rejected { status: u16 },

    /// A success envelope arrived without the `data` payload the operation
    /// needs.
    #[error("response envelope is missing its data payload")]
    MissingData,
}

impl ApiError {
    /// True when the service itself answered (as opposed to the transport
    /// failing underneath it).
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Http { .. })
    }
}
