//! Task record and the input used to create one.

use super::{TaskCategory, TaskDomainError, TaskId, TaskPatch};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Validates a caller-supplied task title.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyTitle`] when the title is blank after
/// trimming.
pub fn validate_title(title: &str) -> Result<(), TaskDomainError> {
    if title.trim().is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(())
}

/// A persisted task record.
///
/// Serialized with camelCase keys so the stored JSON matches the layout
/// `{id, title, description, completed, category, dueDate, createdAt}`.
/// Optional fields missing from stored JSON take their creation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    category: TaskCategory,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a new record from validated input.
    ///
    /// Missing category defaults to [`TaskCategory::General`] and missing
    /// completion to `false`.
    #[must_use]
    pub fn from_new(input: NewTask, id: TaskId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            category: input.category.unwrap_or_default(),
            due_date: input.due_date,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the task is past due at `now`.
    ///
    /// A due date counts from the start of that day in UTC; the task is
    /// overdue once that instant is strictly before `now` and the task is
    /// still active.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed
            && self
                .due_date
                .is_some_and(|due| due.and_time(NaiveTime::MIN).and_utc() < now)
    }

    /// Returns whether the title or description contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(needle))
    }

    /// Shallow-merges `patch` onto this record.
    ///
    /// Fields present in the patch replace the stored value; the identifier
    /// and creation timestamp never change.
    pub fn apply(&mut self, patch: TaskPatch) {
        let TaskPatch {
            title,
            description,
            completed,
            category,
            due_date,
        } = patch;
        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = completed {
            self.completed = value;
        }
        if let Some(value) = category {
            self.category = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
    }
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    category: Option<TaskCategory>,
    due_date: Option<NaiveDate>,
    completed: bool,
}

impl NewTask {
    /// Creates input with the required title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let title_text = title.into();
        validate_title(&title_text)?;
        Ok(Self {
            title: title_text,
            description: None,
            category: None,
            due_date: None,
            completed: false,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}
