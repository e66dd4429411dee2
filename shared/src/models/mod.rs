//! Data models
//!
//! Shared between employee-server and its clients (via API).

pub mod employee;

// Re-exports
pub use employee::*;
