//! Domain model for task tracking.
//!
//! The task domain models a single Task entity: a validated title, an
//! optional description, a two-state completion status, and server-assigned
//! identity and timestamps. All infrastructure concerns stay outside the
//! domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskPatch, TaskStatus};
