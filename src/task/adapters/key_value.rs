//! Task store over a [`KeyValueStore`], persisting the whole collection as
//! one JSON array under a single key.

use async_trait::async_trait;
use mockable::Clock;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::TaskStoreConfig;
use crate::storage::KeyValueStore;
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Task store persisting to a key-value resource with simulated latency.
#[derive(Debug, Clone)]
pub struct KeyValueTaskStore<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    backend: Arc<K>,
    clock: Arc<C>,
    config: TaskStoreConfig,
}

impl<K, C> KeyValueTaskStore<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a store over `backend`.
    #[must_use]
    pub const fn new(backend: Arc<K>, clock: Arc<C>, config: TaskStoreConfig) -> Self {
        Self {
            backend,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    fn key(&self) -> &str {
        &self.config.keys.tasks
    }

    /// Reads the persisted collection, degrading to empty on any failure.
    ///
    /// Records that do not decode as a [`Task`] are skipped, so the next
    /// write persists only well-formed records.
    fn read_snapshot(&self) -> Vec<Task> {
        let raw = match self.backend.get(self.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(
                    key = self.key(),
                    error = %err,
                    "task storage unreadable, treating as empty"
                );
                return Vec::new();
            }
        };
        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(key = self.key(), error = %err, "task storage corrupt");
                return Vec::new();
            }
        };
        records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                Task::deserialize(record)
                    .inspect_err(|err| {
                        tracing::warn!(
                            key = self.key(),
                            index,
                            error = %err,
                            "skipping undecodable task record"
                        );
                    })
                    .ok()
            })
            .collect()
    }

    /// Replaces the persisted collection with `tasks`.
    fn write_snapshot(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let encoded = serde_json::to_string(tasks).map_err(TaskStoreError::serialization)?;
        self.backend.set(self.key(), &encoded)?;
        Ok(())
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl<K, C> TaskStore for KeyValueTaskStore<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    async fn list_tasks(&self) -> Vec<Task> {
        simulate_latency(self.config.latency.list).await;
        let tasks = self.read_snapshot();
        tracing::debug!(count = tasks.len(), "listed tasks");
        tasks
    }

    async fn create_task(&self, input: NewTask) -> TaskStoreResult<Task> {
        let mut tasks = self.read_snapshot();
        let created_at = self.clock.utc();
        let id = TaskId::generate(created_at, tasks.iter().map(Task::id));
        let task = Task::from_new(input, id, created_at);
        tasks.insert(0, task.clone());
        self.write_snapshot(&tasks)?;
        tracing::debug!(task_id = %task.id(), count = tasks.len(), "created task");
        simulate_latency(self.config.latency.create).await;
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        let mut tasks = self.read_snapshot();
        let updated = {
            let task = tasks
                .iter_mut()
                .find(|task| task.id() == id)
                .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
            task.apply(patch);
            task.clone()
        };
        self.write_snapshot(&tasks)?;
        tracing::debug!(task_id = %id, "updated task");
        simulate_latency(self.config.latency.update).await;
        Ok(updated)
    }

    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut tasks = self.read_snapshot();
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() == before {
            tracing::debug!(task_id = %id, "delete skipped, task absent");
        } else {
            self.write_snapshot(&tasks)?;
            tracing::debug!(task_id = %id, count = tasks.len(), "deleted task");
        }
        simulate_latency(self.config.latency.delete).await;
        Ok(())
    }
}
