//! Environment-driven configuration for the API server.

use std::env;
use thiserror::Error;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `DATABASE_URL` is not set.
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    /// `PORT` is set but not a valid TCP port.
    #[error("PORT value '{0}' is not a valid port number")]
    InvalidPort(String),
}

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// TCP port the HTTP listener binds to.
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from `DATABASE_URL` and `PORT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when `DATABASE_URL` is
    /// absent, or [`ConfigError::InvalidPort`] when `PORT` is set to a
    /// non-numeric or out-of-range value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { database_url, port })
    }
}
