//! Unit tests for the task bounded context.

mod service_tests;
