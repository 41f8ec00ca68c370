//! REST surface for the task API.
//!
//! Exposes the five task operations under `/api/tasks`, a liveness root, and
//! a JSON 404 fallback. The router is generic over the repository and clock
//! so tests can drive it with the in-memory adapter.

mod error;
mod handlers;


pub use error::{ApiError, MessageBody};
pub use handlers::{CreateTaskBody, UpdateTaskBody};

use axum::Router;
use axum::routing::get;
use mockable::Clock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};

/// Builds the task API router over an injected service.
#[must_use]
pub fn router<R, C>(service: TaskLifecycleService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::health))
        .route(
            "/api/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/api/tasks/:id",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
