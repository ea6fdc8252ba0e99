//! Configuration for the task store and session collaborators.
//!
//! Both structs deserialize from JSON with every field optional, so a host
//! can override only the values it cares about. Durations are expressed in
//! milliseconds.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Logical keys under which state is persisted in the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    /// Key holding the JSON array of task records.
    pub tasks: String,
    /// Key holding the cached user record.
    pub current_user: String,
    /// Key whose presence marks an authenticated session.
    pub auth_session: String,
    /// Key holding the `"dark"` or `"light"` theme preference.
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: "tasks".to_owned(),
            current_user: "currentUser".to_owned(),
            auth_session: "authSession".to_owned(),
            theme: "theme".to_owned(),
        }
    }
}

/// Simulated latency applied by each task store operation.
///
/// A zero duration skips the timer entirely, so tests never touch the
/// runtime's time driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Latency {
    /// Delay before a listing resolves.
    #[serde(with = "duration_millis")]
    pub list: Duration,
    /// Delay after a create has been written.
    #[serde(with = "duration_millis")]
    pub create: Duration,
    /// Delay after an update has been written.
    #[serde(with = "duration_millis")]
    pub update: Duration,
    /// Delay after a delete has been written.
    #[serde(with = "duration_millis")]
    pub delete: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            create: Duration::from_millis(200),
            update: Duration::from_millis(200),
            delete: Duration::from_millis(200),
        }
    }
}

impl Latency {
    /// Latency profile with every delay set to zero.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            list: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }

    /// Applies the same delay to every operation.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }
}

/// Task store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStoreConfig {
    /// Storage keys shared with the session collaborator.
    pub keys: StorageKeys,
    /// Simulated per-operation latency.
    pub latency: Latency,
}

impl TaskStoreConfig {
    /// Creates a configuration with no simulated latency.
    ///
    /// Useful for tests and for hosts that do not want UX pacing.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            latency: Latency::none(),
            ..Self::default()
        }
    }

    /// Replaces the latency profile.
    #[must_use]
    pub const fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
