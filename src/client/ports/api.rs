//! API port consumed by the client view.

use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Result type for task API calls.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// New-task payload sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskDraft {
    /// Creates a draft with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the draft description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial-update payload sent by the client; absent fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskChanges {
    /// Replacement title, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement status, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Remote task API contract, one method per REST call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetches all tasks, newest first.
    async fn list_tasks(&self) -> TaskApiResult<Vec<Task>>;

    /// Creates a task from the draft and returns the stored record.
    async fn create_task(&self, draft: TaskDraft) -> TaskApiResult<Task>;

    /// Applies partial changes to a task and returns the updated record.
    async fn update_task(&self, id: TaskId, changes: TaskChanges) -> TaskApiResult<Task>;

    /// Deletes a task.
    async fn delete_task(&self, id: TaskId) -> TaskApiResult<()>;
}

/// Errors surfaced by task API adapters.
#[derive(Debug, Error)]
pub enum TaskApiError {
    /// The service answered with an error status and message.
    #[error("{message}")]
    Api {
        /// HTTP status code reported by the service.
        status: u16,
        /// Message from the service error body, or a generic fallback.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
