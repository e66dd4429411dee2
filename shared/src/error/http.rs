//! HTTP status of each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Storage faults on reads are 500; everything a write can fail with,
    /// including uniqueness violations, is 400 except a missing target.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::EmployeeNotFound => StatusCode::NOT_FOUND,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::EmployeeIdExists
            | Self::EmployeeEmailExists
            | Self::EmployeeInvalidId
            | Self::EmployeeWriteFailed => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(
            ErrorCode::EmployeeNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_read_fault_is_server_error() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_write_failures_are_bad_request() {
        for code in [
            ErrorCode::EmployeeIdExists,
            ErrorCode::EmployeeEmailExists,
            ErrorCode::EmployeeWriteFailed,
            ErrorCode::EmployeeInvalidId,
            ErrorCode::ValidationFailed,
            ErrorCode::RequiredField,
            ErrorCode::InvalidFormat,
        ] {
            assert_eq!(code.http_status(), StatusCode::BAD_REQUEST, "{code}");
        }
    }
}
