//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskhub::{
    config::TaskStoreConfig,
    storage::adapters::InMemoryKeyValueStore,
    task::{adapters::KeyValueTaskStore, domain::NewTask},
};

/// Store type exercised by the in-memory integration tests.
pub type TestStore = KeyValueTaskStore<InMemoryKeyValueStore, DefaultClock>;

/// Backend handle plus a store writing to it.
pub struct StoreHarness {
    pub backend: InMemoryKeyValueStore,
    pub store: TestStore,
}

/// Provides a store with no simulated latency over a fresh backend.
#[fixture]
pub fn harness() -> StoreHarness {
    let backend = InMemoryKeyValueStore::new();
    let store = KeyValueTaskStore::new(
        Arc::new(backend.clone()),
        Arc::new(DefaultClock),
        TaskStoreConfig::immediate(),
    );
    StoreHarness { backend, store }
}

/// Builds validated creation input.
///
/// # Errors
///
/// Returns an error when `title` is blank.
pub fn new_task(title: &str) -> Result<NewTask, eyre::Report> {
    NewTask::new(title).map_err(|err| eyre::eyre!("invalid test title {title:?}: {err}"))
}
