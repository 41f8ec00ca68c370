//! Client layer for the task API.
//!
//! Mirrors the hexagonal layout of the service side: the view in [`view`]
//! depends only on the [`ports::TaskApi`] contract, and the HTTP adapter in
//! [`adapters`] is one implementation of it.

pub mod adapters;
pub mod ports;
pub mod view;


pub use view::{StatusFilter, TaskView, TaskViewError, TaskViewResult};
