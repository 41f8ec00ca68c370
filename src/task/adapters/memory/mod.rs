//! In-memory adapter implementations for task ports.

mod task;

pub use task::InMemoryTaskRepository;
