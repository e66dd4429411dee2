//! Error system of the employee API
//!
//! - [`ErrorCode`]: numeric code carried in every error body
//! - [`ErrorCategory`]: code range classification
//! - [`AppError`]: request-level error, implements `IntoResponse`
//! - [`ErrorResponse`]: the JSON error body
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::with_message(ErrorCode::EmployeeIdExists, "employeeId E-001 already exists")
//!     .with_detail("field", "employeeId");
//!
//! let body = ErrorResponse::from(err);
//! assert_eq!(body.code.code(), 8002);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
