//! Input validation helpers
//!
//! 写入前的显式校验：把 `validator` 的结果转换成 [`AppError`]，
//! 一次性列出所有不合法的字段 (camelCase)。

use validator::{Validate, ValidationErrors};

use crate::utils::{AppError, ErrorCode};

/// Validate a request payload, collecting every offending field
pub fn validate_payload<T: Validate>(payload: &T, message: &str) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|errors| validation_error(message, &errors))
}

/// 把 `ValidationErrors` 转成 AppError
///
/// 全部是缺失字段时使用 `RequiredField`，否则 `ValidationFailed`。
pub fn validation_error(message: &str, errors: &ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();

    let mut fields: Vec<String> = field_errors.keys().map(|k| to_camel_case(k)).collect();
    fields.sort();

    let only_missing = field_errors
        .values()
        .flat_map(|errs| errs.iter())
        .all(|e| e.code == "required");
    let code = if only_missing {
        ErrorCode::RequiredField
    } else {
        ErrorCode::ValidationFailed
    };

    AppError::with_message(code, format!("{}: invalid {}", message, fields.join(", ")))
        .with_detail("fields", fields)
}

/// `date_of_joining` -> `dateOfJoining`
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{EmployeeCreate, EmployeeUpdate};

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("date_of_joining"), "dateOfJoining");
        assert_eq!(to_camel_case("email"), "email");
        assert_eq!(to_camel_case("employee_id"), "employeeId");
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let payload = EmployeeCreate {
            employee_id: Some("E-001".into()),
            first_name: Some("Jane".into()),
            ..Default::default()
        };

        let err = validate_payload(&payload, "Error adding employee").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);

        let details = err.details.unwrap();
        assert_eq!(
            details["fields"],
            serde_json::json!(["dateOfJoining", "department", "email", "lastName", "salary"])
        );
    }

    #[test]
    fn test_blank_field_is_validation_failure() {
        let payload = EmployeeUpdate {
            email: Some(String::new()),
            ..Default::default()
        };

        let err = validate_payload(&payload, "Error updating employee").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.starts_with("Error updating employee"));
        assert!(err.message.contains("email"));
    }

    #[test]
    fn test_whitespace_is_not_blank() {
        let payload = EmployeeUpdate {
            department: Some(" ".into()),
            ..Default::default()
        };
        assert!(validate_payload(&payload, "x").is_ok());
    }
}
