//! Session value types.

use super::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 6;

/// Signed-in user as cached in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login email.
    pub email: String,
    /// Display name given at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Creates a user known only by email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name to greet the user with: the display name, else the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Validated registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    user: User,
}

impl Registration {
    /// Validates the registration form fields.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyField`] for a blank field,
    /// [`SessionError::PasswordMismatch`] when the confirmation differs, or
    /// [`SessionError::PasswordTooShort`] for passwords under six
    /// characters.
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, SessionError> {
        require("name", name)?;
        require("email", email)?;
        require("password", password)?;
        if password != confirm_password {
            return Err(SessionError::PasswordMismatch);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SessionError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(Self {
            user: User::new(email).with_name(name),
        })
    }

    /// Returns the user the registration describes.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Consumes the registration, yielding the user.
    #[must_use]
    pub fn into_user(self) -> User {
        self.user
    }
}

pub(super) fn require(field: &'static str, value: &str) -> Result<(), SessionError> {
    if value.trim().is_empty() {
        return Err(SessionError::EmptyField(field));
    }
    Ok(())
}

/// Marker persisted while a user is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Instant after which the session no longer counts.
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Returns whether the session is still valid at `now`.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Colour theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light theme, used when no preference is stored.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parses a stored value, returning `None` for anything unrecognised.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}
