//! Port contracts for the client view.

pub mod api;

pub use api::{TaskApi, TaskApiError, TaskApiResult, TaskChanges, TaskDraft};
