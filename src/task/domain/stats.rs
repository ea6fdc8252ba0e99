//! Dashboard counters over a task collection.

use super::Task;
use chrono::{DateTime, Utc};

/// Summary counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks not yet completed.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Active tasks whose due date has passed.
    pub overdue: usize,
}

impl TaskStats {
    /// Counts `tasks`, evaluating overdue status at `now`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            if task.is_completed() {
                stats.completed += 1;
            } else {
                stats.active += 1;
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
            stats
        })
    }

    /// Returns whether there is at least one task and all are completed.
    #[must_use]
    pub const fn all_completed(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// Tasks left to complete.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.active
    }
}
