//! The logged-in session: bearer token and user profile.

use std::sync::Arc;

use waybill_types::UserProfile;

use crate::client::ApiClient;
use crate::error::ApiError;

/// An opaque bearer token.
///
/// `Debug` redacts the value so a token can never leak through logs.
#[derive(Clone)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization` header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// The app's logged-in state, constructed at login and dropped at logout.
///
/// The client is shared (`Arc`) so spawned request tasks can outlive the
/// screen that started them without keeping the whole session alive.
#[derive(Debug, Clone)]
pub struct Session {
    client: Arc<ApiClient>,
    profile: UserProfile,
}

impl Session {
    /// Authenticate against the service and build the session.
    pub async fn login(base_url: &str, email: &str, password: &str) -> Result<Self, ApiError> {
        let (client, profile) = ApiClient::login(base_url, email, password).await?;
        Ok(Self::from_parts(client, profile))
    }

    /// Assemble a session around an already-authenticated client.
    #[must_use]
    pub fn from_parts(client: ApiClient, profile: UserProfile) -> Self {
        Self {
            client: Arc::new(client),
            profile,
        }
    }

    #[must_use]
    pub fn client(&self) -> Arc<ApiClient> {
        Arc::clone(&self.client)
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Update the cached profile after a successful save or photo upload.
    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::AuthToken;

    #[test]
    fn debug_never_prints_the_token() {
        let token = AuthToken::new("very-secret");
        let formatted = format!("{token:?}");
        assert!(!formatted.contains("very-secret"));
        assert!(formatted.contains("REDACTED"));
    }
}
