//! Taskboard: a minimal task-tracking service.
//!
//! This crate provides a REST backend persisting Task records through a
//! repository port, plus an embeddable client layer that lists, creates,
//! updates, and deletes tasks against that API.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task domain, persistence ports/adapters, and services
//! - [`http`]: axum REST surface over the task service
//! - [`client`]: API port, HTTP adapter, and list view state
//! - [`config`]: environment-driven server configuration

pub mod client;
pub mod config;
pub mod http;
pub mod task;
