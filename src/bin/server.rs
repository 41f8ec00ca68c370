//! Taskboard API server.
//!
//! Reads `DATABASE_URL` and `PORT` from the environment, builds a
//! `PostgreSQL`-backed task service, and serves the REST surface until the
//! process is stopped.

use std::net::SocketAddr;
use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use taskboard::config::{AppConfig, ConfigError};
use taskboard::http;
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use taskboard::task::ports::TaskRepositoryError;
use taskboard::task::services::TaskLifecycleService;

/// Errors that can occur during server bootstrap.
#[derive(Debug, Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database pool init failed: {0}")]
    Pool(String),
    #[error("schema setup failed: {0}")]
    Schema(#[from] TaskRepositoryError),
    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let repository = Arc::new(build_repository(&config.database_url)?);
    repository.ensure_schema().await?;
    tracing::info!("database schema ready");

    let service = TaskLifecycleService::new(repository, Arc::new(DefaultClock));
    let app = http::router(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "taskboard API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_repository(database_url: &str) -> Result<PostgresTaskRepository, ServerError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .map_err(|err| ServerError::Pool(err.to_string()))?;
    Ok(PostgresTaskRepository::new(pool))
}
