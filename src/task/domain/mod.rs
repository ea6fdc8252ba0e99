//! Domain model for personal task management.
//!
//! Task records, the inputs used to create and patch them, and the pure
//! view derivation that turns a stored collection plus UI filter state into
//! the active and completed groups a board renders. Nothing here performs
//! I/O or awaits.

mod category;
mod error;
mod filter;
mod ids;
mod patch;
mod stats;
mod task;
mod view;

pub use category::TaskCategory;
pub use error::{ParseFilterError, ParseTaskCategoryError, TaskDomainError};
pub use filter::{CategoryFilter, StatusFilter, TaskFilter};
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use stats::TaskStats;
pub use task::{NewTask, Task, validate_title};
pub use view::{TaskView, derive_view};
