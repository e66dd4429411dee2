//! Shared types for the employee service
//!
//! Wire-level types used by the server and its clients: the employee API
//! models, the unified error system and date helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode, ErrorResponse};
