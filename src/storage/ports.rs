//! Port contract for the backing key-value resource.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value operations.
pub type KeyValueResult<T> = Result<T, KeyValueError>;

/// Synchronous string key-value store.
///
/// Implementations must make `set` atomic per key: a reader observes either
/// the previous value or the new one, never a torn write.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing resource cannot be read.
    fn get(&self, key: &str) -> KeyValueResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the value cannot be written. The
    /// previous value is left in place.
    fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing resource rejects removal.
    fn remove(&self, key: &str) -> KeyValueResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueError {
    /// The key cannot be represented by this store.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,

    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl KeyValueError {
    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
