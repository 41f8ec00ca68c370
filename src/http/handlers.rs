//! Request handlers for the task REST surface.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use mockable::Clock;
use serde::Deserialize;

use super::error::{ApiError, MessageBody};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskLifecycleService, UpdateTaskRequest},
};

/// Wire payload for task creation.
///
/// The title is optional at the wire level so a missing title maps to the
/// same validation failure as a blank one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Task title, required to be non-blank.
    pub title: Option<String>,
    /// Optional task description.
    pub description: Option<String>,
    /// Optional initial status.
    pub status: Option<TaskStatus>,
}

/// Wire payload for partial task updates.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, when provided.
    pub title: Option<String>,
    /// Replacement description, when provided.
    pub description: Option<String>,
    /// Replacement status, when provided.
    pub status: Option<TaskStatus>,
}

/// `POST /api/tasks`: creates a task, returning 201 with the stored record.
pub async fn create_task<R, C>(
    State(service): State<TaskLifecycleService<R, C>>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = CreateTaskRequest::new(body.title.unwrap_or_default());
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }

    let task = service.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /api/tasks`: returns all tasks, newest first.
pub async fn list_tasks<R, C>(
    State(service): State<TaskLifecycleService<R, C>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// `GET /api/tasks/:id`: returns the matching task or 404.
pub async fn get_task<R, C>(
    State(service): State<TaskLifecycleService<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&id)?;
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// `PUT /api/tasks/:id`: merges provided fields and returns the updated task.
pub async fn update_task<R, C>(
    State(service): State<TaskLifecycleService<R, C>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&id)?;
    let mut request = UpdateTaskRequest::new();
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }

    let task = service.update_task(id, request).await?;
    Ok(Json(task))
}

/// `DELETE /api/tasks/:id`: removes the task and confirms deletion.
pub async fn delete_task<R, C>(
    State(service): State<TaskLifecycleService<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&id)?;
    service.delete_task(id).await?;
    Ok(Json(MessageBody::new("Task deleted")))
}

/// `GET /`: liveness string for humans and load balancers.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health() -> &'static str {
    "Taskboard API running"
}

/// Fallback for unmatched routes.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn route_not_found() -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody::new("Route not found")),
    )
}

/// A malformed identifier is indistinguishable from a missing task to the
/// caller, matching the original API's behaviour.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::parse(raw).ok_or(ApiError::TaskNotFound)
}
