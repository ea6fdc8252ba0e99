//! Fixed set of task categories.

use super::ParseTaskCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a task is filed under.
///
/// Unknown names read from storage fall back to [`TaskCategory::General`],
/// the same category a task receives when none is given at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TaskCategory {
    /// Uncategorised tasks.
    #[default]
    General,
    /// Work-related tasks.
    Work,
    /// Personal errands.
    Personal,
    /// Shopping lists.
    Shopping,
    /// Health and medical appointments.
    Health,
    /// Tasks flagged as urgent.
    Urgent,
}

impl TaskCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Work,
        Self::Personal,
        Self::Shopping,
        Self::Health,
        Self::Urgent,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for TaskCategory {
    type Error = ParseTaskCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseTaskCategoryError(value.to_owned()))
    }
}

impl From<String> for TaskCategory {
    fn from(value: String) -> Self {
        Self::try_from(value.as_str()).unwrap_or_default()
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
