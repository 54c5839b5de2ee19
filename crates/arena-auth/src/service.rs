//! Authentication service — login, refresh, logout and principal
//! extraction.

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::models::user::{User, UserRole, UserStatus};
use arena_core::repository::UserRepository;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// The literal prefix stripped from `Authorization` header values.
const BEARER_PREFIX: &str = "Bearer ";

/// Session response shape returned to callers. On failure callers
/// map the error into the same shape with null tokens via
/// [`SessionTokens::failure`].
#[derive(Debug, Clone, Serialize)]
pub struct SessionTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub message: String,
    pub username: Option<String>,
    pub role: Option<String>,
}

impl SessionTokens {
    fn issued(access_token: String, refresh_token: String, message: &str, user: &User) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
            message: message.into(),
            username: Some(user.username.clone()),
            role: Some(user.role.to_string()),
        }
    }

    /// The failure rendering of the response shape: same fields,
    /// null tokens, human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            message: message.into(),
            username: None,
            role: None,
        }
    }
}

/// The authenticated identity derived from a verified access token.
/// Not persisted; reconstructed per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
}

/// Authentication service.
///
/// Generic over the user repository so the auth layer has no
/// dependency on a concrete store.
pub struct AuthService<U: UserRepository> {
    user_repo: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repo: U, config: AuthConfig) -> Self {
        Self { user_repo, config }
    }

    /// Authenticate with username + password and issue a token pair.
    ///
    /// Failure order: unknown user, then wrong password, then
    /// non-active account. No side effect beyond the audit log.
    pub async fn login(&self, username: &str, raw_password: &str) -> ArenaResult<SessionTokens> {
        let user = self
            .user_repo
            .get_by_username(username)
            .await
            .map_err(|_| AuthError::UserNotFound(username.into()))?;

        let valid = password::verify_password(raw_password, &user.password_hash)?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.status != UserStatus::Active {
            return Err(AuthError::AccountInactive.into());
        }

        let access_token = token::issue_access_token(&user, &self.config)?;
        let refresh_token = token::issue_refresh_token(&user, &self.config)?;

        info!(username = %user.username, "login successful");
        Ok(SessionTokens::issued(
            access_token,
            refresh_token,
            "login successful",
            &user,
        ))
    }

    /// Exchange a valid refresh token for a fresh token pair.
    ///
    /// The user record is re-read so the new access token reflects
    /// the *current* role — a role change takes effect here, not on
    /// outstanding access tokens.
    pub async fn refresh(&self, refresh_token: &str) -> ArenaResult<SessionTokens> {
        let claims = token::decode_refresh_token(refresh_token, &self.config)?;

        let user = self
            .user_repo
            .get_by_username(&claims.sub)
            .await
            .map_err(|_| AuthError::UserNotFound(claims.sub.clone()))?;

        let access_token = token::issue_access_token(&user, &self.config)?;
        let new_refresh_token = token::issue_refresh_token(&user, &self.config)?;

        info!(username = %user.username, "token refreshed");
        Ok(SessionTokens::issued(
            access_token,
            new_refresh_token,
            "token refreshed",
            &user,
        ))
    }

    /// Log a user out.
    ///
    /// No server-side revocation exists: the token stays verifiable
    /// until it expires. This only records the event.
    pub async fn logout(&self, _refresh_token: &str) -> ArenaResult<()> {
        info!("user logged out");
        Ok(())
    }

    /// Resolve the principal behind an `Authorization` header value.
    ///
    /// Strips exactly the literal `"Bearer "` prefix, verifies the
    /// access token, and re-resolves the subject so a removed
    /// account is rejected even with a still-valid token.
    pub async fn current_user(&self, authorization: Option<&str>) -> ArenaResult<Principal> {
        let header = authorization.ok_or(AuthError::MissingAuthorization)?;
        let access_token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::MissingAuthorization)?;

        let claims = token::decode_access_token(access_token, &self.config)?;

        let user = self
            .user_repo
            .get_by_username(&claims.sub)
            .await
            .map_err(|_| AuthError::UserNotFound(claims.sub.clone()))?;

        Ok(Principal {
            user_id: user.id,
            username: user.username,
            role: user.role,
        })
    }
}

impl From<&ArenaError> for SessionTokens {
    /// Render an auth failure in the session response shape.
    fn from(err: &ArenaError) -> Self {
        SessionTokens::failure(err.to_string())
    }
}
