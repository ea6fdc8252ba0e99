//! UI filter state consumed by view derivation.

use super::{ParseFilterError, Task, TaskCategory};

/// Completion-status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// Every task passes.
    #[default]
    All,
    /// Only tasks that are not completed.
    Active,
    /// Only completed tasks.
    Completed,
}

impl StatusFilter {
    /// Returns the UI representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns whether `task` passes this filter.
    #[must_use]
    pub const fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseFilterError::Status(value.to_owned())),
        }
    }
}

/// Category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only tasks filed under exactly this category.
    Only(TaskCategory),
}

impl CategoryFilter {
    /// Returns whether `task` passes this filter.
    #[must_use]
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => task.category() == category,
        }
    }
}

impl From<TaskCategory> for CategoryFilter {
    fn from(category: TaskCategory) -> Self {
        Self::Only(category)
    }
}

impl TryFrom<&str> for CategoryFilter {
    type Error = ParseFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TaskCategory::try_from(value)
            .map(Self::Only)
            .map_err(|_| ParseFilterError::Category(value.to_owned()))
    }
}

/// Search, status, and category filters combined.
///
/// All three compose conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search_query: String,
    status: StatusFilter,
    category: CategoryFilter,
}

impl TaskFilter {
    /// Creates a filter that passes every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search query.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Sets the status filter.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Sets the category filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the raw search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the status filter.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the category filter.
    #[must_use]
    pub const fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Lowercased, trimmed search needle, or `None` for a blank query.
    pub(crate) fn needle(&self) -> Option<String> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// Returns whether `task` passes every filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.admits(task, self.needle().as_deref())
    }

    pub(crate) fn admits(&self, task: &Task, needle: Option<&str>) -> bool {
        self.status.admits(task)
            && self.category.admits(task)
            && needle.is_none_or(|text| task.mentions(text))
    }
}
