//! Session bookkeeping over the shared key-value store.

use super::domain::{AuthSession, Registration, Theme, User, require};
use super::error::{SessionError, SessionResult};
use crate::config::StorageKeys;
use crate::storage::KeyValueStore;
use chrono::TimeDelta;
use mockable::Clock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Days a login stays valid.
pub const SESSION_LIFETIME_DAYS: i64 = 7;

/// Mocked authentication and preference service.
#[derive(Clone)]
pub struct SessionService<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    backend: Arc<K>,
    clock: Arc<C>,
    keys: StorageKeys,
}

impl<K, C> SessionService<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a session service over `backend`.
    #[must_use]
    pub const fn new(backend: Arc<K>, clock: Arc<C>, keys: StorageKeys) -> Self {
        Self {
            backend,
            clock,
            keys,
        }
    }

    /// Registers a user and signs them in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the session cannot be persisted.
    pub fn register(&self, registration: Registration) -> SessionResult<User> {
        let user = registration.into_user();
        self.start_session(&user)?;
        Ok(user)
    }

    /// Signs in with any non-blank credentials.
    ///
    /// When the cached user has the same email, it is reused so the display
    /// name given at registration survives logout.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyField`] for blank credentials or a
    /// storage error when the session cannot be persisted.
    pub fn login(&self, email: &str, password: &str) -> SessionResult<User> {
        require("email", email)?;
        require("password", password)?;
        let user = self
            .cached_user()
            .filter(|cached| cached.email == email)
            .unwrap_or_else(|| User::new(email));
        self.start_session(&user)?;
        Ok(user)
    }

    /// Ends the session, keeping the cached user for the next login.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the marker cannot be removed.
    pub fn logout(&self) -> SessionResult<()> {
        self.backend.remove(&self.keys.auth_session)?;
        tracing::info!("session ended");
        Ok(())
    }

    /// Returns whether an unexpired session marker is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read_json::<AuthSession>(&self.keys.auth_session)
            .is_some_and(|session| session.is_active(self.clock.utc()))
    }

    /// Returns the signed-in user, or `None` when signed out.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        if !self.is_authenticated() {
            return None;
        }
        self.cached_user()
    }

    /// Returns the stored theme, defaulting to light.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.backend
            .get(&self.keys.theme)
            .ok()
            .flatten()
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    /// Stores a theme preference.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the value cannot be written.
    pub fn set_theme(&self, theme: Theme) -> SessionResult<()> {
        self.backend.set(&self.keys.theme, theme.as_str())?;
        Ok(())
    }

    /// Switches between light and dark and returns the new theme.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the value cannot be written.
    pub fn toggle_theme(&self) -> SessionResult<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    fn cached_user(&self) -> Option<User> {
        self.read_json(&self.keys.current_user)
    }

    fn start_session(&self, user: &User) -> SessionResult<()> {
        let session = AuthSession {
            expires_at: self.clock.utc() + TimeDelta::days(SESSION_LIFETIME_DAYS),
        };
        self.write_json(&self.keys.current_user, user)?;
        self.write_json(&self.keys.auth_session, &session)?;
        tracing::info!(email = %user.email, "session started");
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key).ok().flatten()?;
        serde_json::from_str(&raw)
            .inspect_err(|err| {
                tracing::warn!(key, error = %err, "ignoring unreadable session value");
            })
            .ok()
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> SessionResult<()> {
        let encoded = serde_json::to_string(value).map_err(SessionError::serialization)?;
        self.backend.set(key, &encoded)?;
        Ok(())
    }
}
