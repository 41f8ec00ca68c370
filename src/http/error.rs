//! HTTP error mapping for the task API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::task::{
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::TaskLifecycleError,
};

/// JSON body carried by error responses and delete confirmations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    /// Human-readable message.
    pub message: String,
}

impl MessageBody {
    /// Creates a message body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User-visible API failure kinds.
///
/// Everything that is not a validation failure or a missing task collapses
/// to a generic 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request payload failed validation (400).
    Validation(String),
    /// No task matches the requested identifier (404).
    TaskNotFound,
    /// Persistence or other internal failure (500).
    Internal,
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(domain_err) => match domain_err {
                TaskDomainError::EmptyTitle => Self::Validation(domain_err.to_string()),
            },
            TaskLifecycleError::Repository(TaskRepositoryError::NotFound(_)) => Self::TaskNotFound,
            TaskLifecycleError::Repository(repo_err) => {
                tracing::error!(error = %repo_err, "task repository failure");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::TaskNotFound => (StatusCode::NOT_FOUND, "Task not found".to_owned()),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Server Error".to_owned()),
        };
        (status, Json(MessageBody::new(message))).into_response()
    }
}
