//! Arena Auth — password authentication, JWT issuance/verification,
//! and session orchestration.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, Principal, SessionTokens};
pub use token::{AccessTokenClaims, RefreshTokenClaims};
