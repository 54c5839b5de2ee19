//! Error types for the Arena system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity} ({value})")]
    AlreadyExists { entity: String, value: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Illegal {entity} transition: {from} -> {to}")]
    IllegalTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ArenaResult<T> = Result<T, ArenaError>;

impl ArenaError {
    /// Shorthand for the `NotFound` variant.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        ArenaError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}
