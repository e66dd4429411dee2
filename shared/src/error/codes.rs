//! Error codes of the employee API
//!
//! - 0xxx: request errors
//! - 8xxx: employee errors
//! - 9xxx: system errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in every error body
///
/// Serialized as a bare number so clients can match on it without parsing
/// the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    /// A present field violates its rule (blank required string, ...)
    ValidationFailed = 2,
    /// Query string could not be decoded
    InvalidRequest = 5,
    /// Malformed JSON, wrong field type or unparseable date
    InvalidFormat = 6,
    /// One or more required fields are missing
    RequiredField = 7,

    // ==================== 8xxx: Employee ====================
    EmployeeNotFound = 8001,
    /// Another employee already uses this employeeId
    EmployeeIdExists = 8002,
    /// Another employee already uses this email
    EmployeeEmailExists = 8003,
    /// Internal identifier is malformed or names another table
    EmployeeInvalidId = 8004,
    /// Storage rejected an employee write
    EmployeeWriteFailed = 8005,

    // ==================== 9xxx: System ====================
    /// Storage fault on a read
    DatabaseError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Unknown numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeIdExists),
            8003 => Ok(ErrorCode::EmployeeEmailExists),
            8004 => Ok(ErrorCode::EmployeeInvalidId),
            8005 => Ok(ErrorCode::EmployeeWriteFailed),

            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::EmployeeEmailExists.code(), 8003);
        assert_eq!(ErrorCode::EmployeeWriteFailed.code(), 8005);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(ErrorCode::try_from(8002), Ok(ErrorCode::EmployeeIdExists));
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::EmployeeEmailExists).unwrap();
        assert_eq!(json, "8003");

        let code: ErrorCode = serde_json::from_str("8001").unwrap();
        assert_eq!(code, ErrorCode::EmployeeNotFound);

        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::EmployeeNotFound.to_string(), "8001");
        assert_eq!(InvalidErrorCode(42).to_string(), "invalid error code: 42");
    }
}
