//! Adapter implementations for client ports.

mod http;

pub use http::HttpTaskApi;
