//! Errors for session bookkeeping.

use crate::storage::KeyValueError;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors returned by registration, login, and preference updates.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// A required form field was blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password is shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// A value could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// The backing store rejected the operation.
    #[error("storage error: {0}")]
    Storage(#[from] KeyValueError),
}

impl SessionError {
    /// Wraps a serialization error.
    #[must_use]
    pub fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
