//! Pure derivation of the grouped task view.

use super::{Task, TaskFilter};

/// Filtered tasks split into active and completed groups.
///
/// Every sequence keeps the relative order of the input collection, which
/// is newest first as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskView<'a> {
    filtered: Vec<&'a Task>,
    active: Vec<&'a Task>,
    completed: Vec<&'a Task>,
}

impl<'a> TaskView<'a> {
    /// Every task that passed the filter.
    #[must_use]
    pub fn filtered(&self) -> &[&'a Task] {
        &self.filtered
    }

    /// Filtered tasks that are not completed.
    #[must_use]
    pub fn active(&self) -> &[&'a Task] {
        &self.active
    }

    /// Filtered tasks that are completed.
    #[must_use]
    pub fn completed(&self) -> &[&'a Task] {
        &self.completed
    }

    /// Number of tasks that passed the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Returns whether no task passed the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Derives the grouped view of `tasks` under `filter`.
///
/// Deterministic and side-effect free: the same inputs always yield the
/// same sequences, and `tasks` is only borrowed.
#[must_use]
pub fn derive_view<'a>(tasks: &'a [Task], filter: &TaskFilter) -> TaskView<'a> {
    let needle = filter.needle();
    let filtered: Vec<&Task> = tasks
        .iter()
        .filter(|task| filter.admits(task, needle.as_deref()))
        .collect();
    let (completed, active): (Vec<&Task>, Vec<&Task>) =
        filtered.iter().partition(|task| task.is_completed());
    TaskView {
        filtered,
        active,
        completed,
    }
}
