//! Service layer the presentation tier calls to read and mutate tasks.
//!
//! Every mutation goes to the store first and is followed by a full
//! refetch; the returned [`BoardSnapshot`] is always the canonical stored
//! collection, never a locally patched copy.

use crate::task::{
    domain::{
        NewTask, Task, TaskCategory, TaskDomainError, TaskFilter, TaskId, TaskPatch, TaskStats,
        TaskView, derive_view, validate_title,
    },
    ports::{TaskStore, TaskStoreError},
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for adding a task from form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    description: Option<String>,
    category: Option<TaskCategory>,
    due_date: Option<NaiveDate>,
}

impl AddTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: None,
            due_date: None,
        }
    }

    /// Sets the description. A blank description is treated as absent.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        self.description = (!text.trim().is_empty()).then_some(text);
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    fn into_new_task(self) -> Result<NewTask, TaskDomainError> {
        let mut input = NewTask::new(self.title)?;
        if let Some(description) = self.description {
            input = input.with_description(description);
        }
        if let Some(category) = self.category {
            input = input.with_category(category);
        }
        if let Some(due_date) = self.due_date {
            input = input.with_due_date(due_date);
        }
        Ok(input)
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Input validation failed before reaching the store.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Canonical task collection as fetched from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    tasks: Vec<Task>,
    taken_at: DateTime<Utc>,
}

impl BoardSnapshot {
    /// Returns the stored tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns when the snapshot was fetched.
    #[must_use]
    pub const fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Derives the grouped view under `filter`.
    #[must_use]
    pub fn view(&self, filter: &TaskFilter) -> TaskView<'_> {
        derive_view(&self.tasks, filter)
    }

    /// Dashboard counters, with overdue evaluated at fetch time.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks, self.taken_at)
    }

    /// Returns whether `task` was overdue when the snapshot was fetched.
    #[must_use]
    pub fn is_overdue(&self, task: &Task) -> bool {
        task.is_overdue(self.taken_at)
    }
}

/// Outcome of a mutation that returns the affected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    /// The record as written by the store.
    pub task: Task,
    /// The collection refetched after the write.
    pub snapshot: BoardSnapshot,
}

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskBoardService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Fetches the canonical collection.
    pub async fn load(&self) -> BoardSnapshot {
        let tasks = self.store.list_tasks().await;
        BoardSnapshot {
            tasks,
            taken_at: self.clock.utc(),
        }
    }

    /// Validates and stores a new task, then refetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for a blank title, without
    /// touching the store, or [`TaskBoardError::Store`] when the write
    /// fails.
    pub async fn add_task(&self, request: AddTaskRequest) -> TaskBoardResult<BoardUpdate> {
        let input = request.into_new_task()?;
        let task = self.store.create_task(input).await?;
        Ok(self.refetch(task).await)
    }

    /// Flips the completion flag of `task`, then refetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] with
    /// [`TaskStoreError::NotFound`] when the task has been deleted meanwhile.
    pub async fn toggle_task(&self, task: &Task) -> TaskBoardResult<BoardUpdate> {
        let patch = TaskPatch::completion(!task.is_completed());
        let updated = self.store.update_task(task.id(), patch).await?;
        Ok(self.refetch(updated).await)
    }

    /// Applies an edit to text, category, or due date, then refetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for a blank replacement title,
    /// [`TaskDomainError::CompletionRequiresToggle`] when the patch touches
    /// completion, or [`TaskBoardError::Store`] when the store rejects the
    /// update.
    pub async fn edit_task(&self, id: &TaskId, patch: TaskPatch) -> TaskBoardResult<BoardUpdate> {
        if patch.completed().is_some() {
            return Err(TaskDomainError::CompletionRequiresToggle.into());
        }
        if let Some(title) = patch.title() {
            validate_title(title)?;
        }
        let updated = self.store.update_task(id, patch).await?;
        Ok(self.refetch(updated).await)
    }

    /// Removes a task, then refetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when the write fails.
    pub async fn delete_task(&self, id: &TaskId) -> TaskBoardResult<BoardSnapshot> {
        self.store.delete_task(id).await?;
        Ok(self.load().await)
    }

    async fn refetch(&self, task: Task) -> BoardUpdate {
        let snapshot = self.load().await;
        tracing::debug!(task_id = %task.id(), count = snapshot.tasks.len(), "board refreshed");
        BoardUpdate { task, snapshot }
    }
}
