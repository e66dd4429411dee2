//! Employee Model
//!
//! Wire-level types of the `/api/employees` resource. Field names are
//! camelCase on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Internal identifier assigned by storage ("employee:<key>")
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::flexible_date"
    )]
    pub date_of_birth: Option<NaiveDate>,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub date_of_joining: NaiveDate,
    pub salary: f64,
}

/// Create employee payload
///
/// Required fields are `Option` so that a missing field surfaces as a
/// validation error listing every offending field, instead of a bare
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[validate(required, length(min = 1))]
    pub employee_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub last_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::flexible_date"
    )]
    pub date_of_birth: Option<NaiveDate>,
    #[validate(required, length(min = 1))]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::flexible_date"
    )]
    #[validate(required)]
    pub date_of_joining: Option<NaiveDate>,
    #[validate(required)]
    pub salary: Option<f64>,
}

/// Update employee payload
///
/// Absent fields are left unchanged. `phoneNumber`, `dateOfBirth` and
/// `position` may be sent as `null` to clear them; the other fields may not
/// be `null`, and required strings may not be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::util::non_null::deserialize"
    )]
    #[validate(length(min = 1))]
    pub employee_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::util::non_null::deserialize"
    )]
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::util::non_null::deserialize"
    )]
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::util::non_null::deserialize"
    )]
    #[validate(length(min = 1))]
    pub email: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::util::nullable::deserialize"
    )]
    pub phone_number: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::nullable_date"
    )]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::util::non_null::deserialize"
    )]
    #[validate(length(min = 1))]
    pub department: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::util::nullable::deserialize"
    )]
    pub position: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::non_null_date"
    )]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::util::non_null::deserialize"
    )]
    pub salary: Option<f64>,
}

/// Query parameters of `GET /api/employees`
///
/// Dates stay raw strings here; the filter builder parses them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQuery {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Query parameters of `GET /api/employees/search`
///
/// `startDate` / `endDate` are accepted but do not narrow the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSearchQuery {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Plain confirmation body, e.g. `{ "message": "Employee deleted successfully" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
