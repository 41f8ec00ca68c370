//! Client-side task list view state.
//!
//! The view holds the last-fetched task list and a locally applied status
//! filter. Every mutating action issues the corresponding API call and then
//! re-fetches the whole list, so the view never drifts from the service.

use std::sync::Arc;
use thiserror::Error;

use crate::client::ports::{TaskApi, TaskApiError, TaskChanges, TaskDraft};
use crate::task::domain::{Task, TaskDomainError, TaskId, TaskStatus, TaskTitle};

/// Three-way task filter applied without a server round-trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Show every task.
    #[default]
    All,
    /// Show only pending tasks.
    Pending,
    /// Show only completed tasks.
    Completed,
}

impl StatusFilter {
    /// Returns `true` when a task with the given status passes the filter.
    #[must_use]
    pub const fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => matches!(status, TaskStatus::Pending),
            Self::Completed => matches!(status, TaskStatus::Completed),
        }
    }
}

/// Errors surfaced to the user of the view.
#[derive(Debug, Error)]
pub enum TaskViewError {
    /// The entered title failed the local non-blank check; no request was
    /// made.
    #[error(transparent)]
    BlankTitle(#[from] TaskDomainError),
    /// The referenced task is not in the current view state.
    #[error("no task {0} in view")]
    UnknownTask(TaskId),
    /// An API call failed.
    #[error(transparent)]
    Api(#[from] TaskApiError),
}

/// Result type for view actions.
pub type TaskViewResult<T> = Result<T, TaskViewError>;

/// Task list view state over an injected API handle.
pub struct TaskView {
    api: Arc<dyn TaskApi>,
    tasks: Vec<Task>,
    filter: StatusFilter,
}

impl TaskView {
    /// Creates an empty view; call [`TaskView::refresh`] to load tasks.
    #[must_use]
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            filter: StatusFilter::All,
        }
    }

    /// Re-fetches the task list from the service.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::Api`] when the fetch fails; the previous
    /// list is kept in that case.
    pub async fn refresh(&mut self) -> TaskViewResult<()> {
        self.tasks = self.api.list_tasks().await?;
        Ok(())
    }

    /// Creates a task and re-fetches.
    ///
    /// Mirrors the server's non-blank-title rule locally: a blank title is
    /// rejected before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::BlankTitle`] for a blank title or
    /// [`TaskViewError::Api`] when a call fails.
    pub async fn add_task(
        &mut self,
        title: &str,
        description: Option<String>,
    ) -> TaskViewResult<()> {
        let title = TaskTitle::new(title)?;
        let mut draft = TaskDraft::new(title.as_str());
        if let Some(description) = description {
            draft = draft.with_description(description);
        }
        self.api.create_task(draft).await?;
        self.refresh().await
    }

    /// Flips a task between pending and completed, then re-fetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::UnknownTask`] when the id is not in the
    /// current list, or [`TaskViewError::Api`] when a call fails.
    pub async fn toggle_status(&mut self, id: TaskId) -> TaskViewResult<()> {
        let current = self
            .tasks
            .iter()
            .find(|task| task.id() == id)
            .ok_or(TaskViewError::UnknownTask(id))?
            .status();
        let changes = TaskChanges::new().with_status(current.toggled());
        self.api.update_task(id, changes).await?;
        self.refresh().await
    }

    /// Renames a task, then re-fetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::BlankTitle`] for a blank title or
    /// [`TaskViewError::Api`] when a call fails.
    pub async fn rename_task(&mut self, id: TaskId, title: &str) -> TaskViewResult<()> {
        let title = TaskTitle::new(title)?;
        let changes = TaskChanges::new().with_title(title.as_str());
        self.api.update_task(id, changes).await?;
        self.refresh().await
    }

    /// Deletes a task, then re-fetches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskViewError::Api`] when a call fails.
    pub async fn remove_task(&mut self, id: TaskId) -> TaskViewResult<()> {
        self.api.delete_task(id).await?;
        self.refresh().await
    }

    /// Sets the local status filter.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Returns the active status filter.
    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Returns the full fetched task list, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks passing the active filter, preserving order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task.status()))
            .collect()
    }
}
