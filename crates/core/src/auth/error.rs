use thiserror::Error;

use super::ProviderError;

/// Authentication failures, classified into a small closed set so UI code
/// never has to inspect provider-specific codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email is not on the admin allow-list. Raised before the provider is
    /// contacted, so addresses that could never succeed leak no detail.
    #[error("access denied: administrators only")]
    AccessDenied,
    #[error("no account exists for this email")]
    NotFound,
    #[error("wrong credentials")]
    BadCredentials,
    #[error("malformed email address")]
    MalformedEmail,
    #[error("too many attempts, try again later")]
    RateLimited,
    #[error("authentication failed: {0}")]
    Other(String),
}

/// Result type for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Translation table from provider error codes to [`AuthError`] kinds.
///
/// The codes are the Firebase-Auth-shaped strings the provider emits; any
/// unknown code falls through to `Other` with the provider's message.
pub fn classify_provider_error(error: ProviderError) -> AuthError {
    match error.code.as_str() {
        "auth/user-not-found" => AuthError::NotFound,
        "auth/wrong-password" | "auth/invalid-credential" => AuthError::BadCredentials,
        "auth/invalid-email" => AuthError::MalformedEmail,
        "auth/too-many-requests" => AuthError::RateLimited,
        _ => AuthError::Other(error.message),
    }
}
