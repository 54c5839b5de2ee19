//! Authentication error types.

use arena_core::error::ArenaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("account is not active")]
    AccountInactive,

    /// Covers malformed, unsigned and expired tokens alike — the
    /// verification boundary does not distinguish them.
    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("authorization header missing or malformed")]
    MissingAuthorization,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for ArenaError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Crypto(msg) => ArenaError::Crypto(msg),
            other => ArenaError::AuthenticationFailed {
                reason: other.to_string(),
            },
        }
    }
}
