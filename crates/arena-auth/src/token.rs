//! JWT issuance and verification for access and refresh tokens.
//!
//! Both token kinds are signed HS256 with the one configured secret
//! and differ only in claim set and lifetime. Refresh tokens carry
//! the subject alone — no role, no user id — so a stale role cannot
//! leak through a refresh cycle; the session manager re-reads the
//! user record instead.

use arena_core::models::user::{User, UserRole};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject — username.
    pub sub: String,
    /// User ID.
    pub user_id: Uuid,
    /// Role at issuance time. Role changes take effect on the next
    /// refresh, not on outstanding access tokens.
    pub role: UserRole,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Claims embedded in every refresh token. Subject only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

fn encoding_key(config: &AuthConfig) -> EncodingKey {
    EncodingKey::from_secret(config.jwt_secret.as_bytes())
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["sub", "exp", "iat"]);
    // A token is valid strictly while now < exp.
    validation.leeway = 0;
    validation
}

/// Issue a signed HS256 access token for `user`.
pub fn issue_access_token(user: &User, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: user.username.clone(),
        user_id: user.id,
        role: user.role,
        iat: now,
        exp: now + config.access_token_lifetime_secs as i64,
    };

    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &encoding_key(config))
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Issue a signed HS256 refresh token for `user` (7x access lifetime).
pub fn issue_refresh_token(user: &User, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = RefreshTokenClaims {
        sub: user.username.clone(),
        iat: now,
        exp: now + config.refresh_token_lifetime_secs() as i64,
    };

    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &encoding_key(config))
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify an access token (signature + expiry).
///
/// Any failure — malformed, bad signature, expired — maps to the
/// single [`AuthError::TokenInvalid`] kind.
pub fn decode_access_token(
    token: &str,
    config: &AuthConfig,
) -> Result<AccessTokenClaims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &validation())
        .map(|data| data.claims)
        .map_err(|e| AuthError::TokenInvalid(e.to_string()))
}

/// Decode and verify a refresh token (signature + expiry).
pub fn decode_refresh_token(
    token: &str,
    config: &AuthConfig,
) -> Result<RefreshTokenClaims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    jsonwebtoken::decode::<RefreshTokenClaims>(token, &key, &validation())
        .map(|data| data.claims)
        .map_err(|e| AuthError::TokenInvalid(e.to_string()))
}

/// Extract the subject from a token after full verification.
///
/// This is never a trust-the-payload shortcut: the signature and
/// expiry are checked exactly as in the decode functions.
pub fn subject_of(token: &str, config: &AuthConfig) -> Result<String, AuthError> {
    decode_refresh_token(token, config).map(|claims| claims.sub)
}
