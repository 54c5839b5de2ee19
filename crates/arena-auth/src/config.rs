//! Authentication configuration.

/// Configuration for the authentication service.
///
/// Loaded once at process start and never mutated afterwards; the
/// signing secret is shared by access and refresh tokens (HS256).
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared HMAC secret for JWT signing and verification.
    pub jwt_secret: String,
    /// Access token lifetime in seconds (default: 3600 = 1 hour).
    pub access_token_lifetime_secs: u64,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, access_token_lifetime_secs: u64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_lifetime_secs,
        }
    }

    /// Refresh tokens live 7x as long as access tokens.
    pub fn refresh_token_lifetime_secs(&self) -> u64 {
        self.access_token_lifetime_secs * 7
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            access_token_lifetime_secs: 3600,
        }
    }
}
