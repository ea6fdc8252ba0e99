//! Session service tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use std::sync::RwLock;

use crate::config::StorageKeys;
use crate::session::{
    Registration, SESSION_LIFETIME_DAYS, SessionError, SessionService, Theme, User,
};
use crate::storage::{KeyValueStore, adapters::InMemoryKeyValueStore};

/// Clock that tests can move forward.
#[derive(Debug)]
struct SteppingClock(RwLock<DateTime<Utc>>);

impl SteppingClock {
    fn advance(&self, by: TimeDelta) {
        if let Ok(mut now) = self.0.write() {
            *now += by;
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.read().map(|now| *now).unwrap_or_default()
    }
}

struct Harness {
    backend: InMemoryKeyValueStore,
    clock: Arc<SteppingClock>,
    service: SessionService<InMemoryKeyValueStore, SteppingClock>,
}

#[fixture]
fn harness() -> Harness {
    let backend = InMemoryKeyValueStore::new();
    let start = Utc
        .with_ymd_and_hms(2026, 2, 1, 8, 0, 0)
        .single()
        .expect("valid start time");
    let clock = Arc::new(SteppingClock(RwLock::new(start)));
    let service = SessionService::new(
        Arc::new(backend.clone()),
        Arc::clone(&clock),
        StorageKeys::default(),
    );
    Harness {
        backend,
        clock,
        service,
    }
}

#[rstest]
#[case("", "ada@example.com", "secret1", "secret1", SessionError::EmptyField("name"))]
#[case("Ada", " ", "secret1", "secret1", SessionError::EmptyField("email"))]
#[case("Ada", "ada@example.com", "secret1", "secret2", SessionError::PasswordMismatch)]
#[case("Ada", "ada@example.com", "abc", "abc", SessionError::PasswordTooShort { min: 6 })]
fn registration_rejects_invalid_forms(
    #[case] name: &str,
    #[case] email: &str,
    #[case] password: &str,
    #[case] confirm: &str,
    #[case] expected: SessionError,
) {
    let err = Registration::new(name, email, password, confirm).expect_err("form is invalid");
    assert_eq!(err.to_string(), expected.to_string());
}

#[rstest]
fn register_signs_in_with_display_name(harness: Harness) {
    let registration = Registration::new("Ada", "ada@example.com", "secret1", "secret1")
        .expect("valid registration");
    let user = harness.service.register(registration).expect("register");

    assert_eq!(user.display_name(), "Ada");
    assert!(harness.service.is_authenticated());
    assert_eq!(harness.service.current_user(), Some(user));
}

#[rstest]
fn login_rejects_blank_credentials(harness: Harness) {
    let result = harness.service.login("ada@example.com", "  ");
    assert!(matches!(result, Err(SessionError::EmptyField("password"))));
    assert!(!harness.service.is_authenticated());
}

#[rstest]
fn logout_keeps_name_cache_for_next_login(harness: Harness) {
    let registration = Registration::new("Ada", "ada@example.com", "secret1", "secret1")
        .expect("valid registration");
    harness.service.register(registration).expect("register");

    harness.service.logout().expect("logout");
    assert!(!harness.service.is_authenticated());
    assert_eq!(harness.service.current_user(), None);

    let user = harness
        .service
        .login("ada@example.com", "anything")
        .expect("login");
    assert_eq!(user.name.as_deref(), Some("Ada"));
}

#[rstest]
fn login_with_other_email_starts_fresh_user(harness: Harness) {
    let registration = Registration::new("Ada", "ada@example.com", "secret1", "secret1")
        .expect("valid registration");
    harness.service.register(registration).expect("register");

    let user = harness
        .service
        .login("grace@example.com", "pw")
        .expect("login");
    assert_eq!(user, User::new("grace@example.com"));
    assert_eq!(user.display_name(), "grace@example.com");
}

#[rstest]
fn session_expires_after_seven_days(harness: Harness) {
    harness
        .service
        .login("ada@example.com", "pw")
        .expect("login");

    harness
        .clock
        .advance(TimeDelta::days(SESSION_LIFETIME_DAYS) - TimeDelta::seconds(1));
    assert!(harness.service.is_authenticated());

    harness.clock.advance(TimeDelta::seconds(1));
    assert!(!harness.service.is_authenticated());
}

#[rstest]
fn corrupt_user_cache_reads_as_signed_out_user(harness: Harness) {
    harness
        .service
        .login("ada@example.com", "pw")
        .expect("login");
    harness
        .backend
        .set("currentUser", "{broken")
        .expect("overwrite cache");

    assert!(harness.service.is_authenticated());
    assert_eq!(harness.service.current_user(), None);
}

#[rstest]
fn theme_defaults_to_light_and_toggles(harness: Harness) {
    assert_eq!(harness.service.theme(), Theme::Light);

    assert_eq!(harness.service.toggle_theme().expect("toggle"), Theme::Dark);
    assert_eq!(
        harness.backend.get("theme").expect("read").as_deref(),
        Some("dark")
    );

    harness.service.set_theme(Theme::Light).expect("set");
    assert_eq!(harness.service.theme(), Theme::Light);
}

#[rstest]
fn unknown_stored_theme_falls_back_to_light(harness: Harness) {
    harness.backend.set("theme", "sepia").expect("write");
    assert_eq!(harness.service.theme(), Theme::Light);
}
