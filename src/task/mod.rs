//! Task tracking for Taskboard.
//!
//! This module implements the full Task resource lifecycle: validated
//! creation, newest-first listing, lookup, partial update, and hard
//! deletion. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
