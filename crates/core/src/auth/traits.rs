use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

use super::Principal;

/// Raw provider failure: an opaque code plus a human-readable message.
///
/// Codes are classified into [`super::AuthError`] kinds by
/// [`super::classify_provider_error`]; nothing outside the auth module
/// should match on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// External identity provider, Firebase-Auth-shaped.
///
/// Auth-state transitions are pushed on a broadcast stream: `Some(principal)`
/// when an account signs in, `None` when the session ends.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs in with email and password. On success the provider also emits
    /// the new principal on the auth-state stream.
    async fn sign_in(&self, email: &str, password: &str)
        -> Result<Principal, ProviderError>;

    /// Ends the current session and emits `None` on the auth-state stream.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Subscribes to auth-state transitions.
    fn auth_state(&self) -> broadcast::Receiver<Option<Principal>>;
}
