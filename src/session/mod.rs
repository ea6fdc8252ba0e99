//! Mocked sign-in state and display preferences.
//!
//! Authentication is entirely client-side: registering or logging in
//! records a session marker with a seven-day expiry and caches the user so
//! a later login can restore the display name. The theme preference lives
//! alongside under its own key.

mod domain;
mod error;
mod service;

pub use domain::{AuthSession, Registration, Theme, User};
pub use error::{SessionError, SessionResult};
pub use service::{SESSION_LIFETIME_DAYS, SessionService};

#[cfg(test)]
mod tests;
