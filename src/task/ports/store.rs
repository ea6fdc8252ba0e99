//! Store port for asynchronous task create, read, update, and delete.

use crate::storage::KeyValueError;
use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Ordered, newest-first task persistence contract.
///
/// Every operation reads the latest persisted snapshot before acting and
/// finishes its write before resolving, so sequential callers always
/// observe their own writes.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every stored task, newest first.
    ///
    /// Missing or unreadable data yields an empty list rather than an
    /// error.
    async fn list_tasks(&self) -> Vec<Task>;

    /// Stores a new task at the head of the collection and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Serialization`] or
    /// [`TaskStoreError::Persistence`] when the updated collection cannot be
    /// written.
    async fn create_task(&self, input: NewTask) -> TaskStoreResult<Task>;

    /// Merges `patch` onto the task with `id` and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has `id`, leaving
    /// the collection unchanged, or a write error as for
    /// [`TaskStore::create_task`].
    async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Task>;

    /// Removes the task with `id`. Removing an absent task succeeds.
    ///
    /// # Errors
    ///
    /// Returns a write error as for [`TaskStore::create_task`].
    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The collection could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// The backing store rejected the write.
    #[error("persistence error: {0}")]
    Persistence(#[from] KeyValueError),
}

impl TaskStoreError {
    /// Wraps a serialization error.
    #[must_use]
    pub fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
