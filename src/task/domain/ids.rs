//! Identifier type for task records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unique identifier for a task record.
///
/// Generated identifiers are the creation time in epoch milliseconds,
/// rendered as a decimal string. Identifiers read back from storage are
/// accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates an identifier from `at` that collides with none of
    /// `existing`.
    ///
    /// Starts from the millisecond timestamp and steps forward one
    /// millisecond at a time until a free value is found.
    #[must_use]
    pub fn generate<'a>(at: DateTime<Utc>, existing: impl IntoIterator<Item = &'a Self>) -> Self {
        let taken: HashSet<&str> = existing.into_iter().map(Self::as_str).collect();
        let mut millis = at.timestamp_millis();
        loop {
            let candidate = millis.to_string();
            if !taken.contains(candidate.as_str()) {
                return Self(candidate);
            }
            millis = millis.saturating_add(1);
        }
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
