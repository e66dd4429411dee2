//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{EmployeeCreate, EmployeeUpdate};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::db::repository::RepoError;

/// Employee row as stored in the `employee` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub department: String,
    #[serde(default)]
    pub position: Option<String>,
    pub date_of_joining: NaiveDate,
    pub salary: f64,
}

/// Insert content; the storage assigns the id
#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub date_of_joining: NaiveDate,
    pub salary: f64,
}

/// MERGE content; `None` fields are left untouched
///
/// `Some(None)` serializes as NONE, which MERGE treats as removing the field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.date_of_birth.is_none()
            && self.department.is_none()
            && self.position.is_none()
            && self.date_of_joining.is_none()
            && self.salary.is_none()
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, RepoError> {
    value.ok_or_else(|| RepoError::Validation(format!("{} is required", field)))
}

impl TryFrom<EmployeeCreate> for NewEmployee {
    type Error = RepoError;

    fn try_from(payload: EmployeeCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_id: required(payload.employee_id, "employeeId")?,
            first_name: required(payload.first_name, "firstName")?,
            last_name: required(payload.last_name, "lastName")?,
            email: required(payload.email, "email")?,
            phone_number: payload.phone_number,
            date_of_birth: payload.date_of_birth,
            department: required(payload.department, "department")?,
            position: payload.position,
            date_of_joining: required(payload.date_of_joining, "dateOfJoining")?,
            salary: required(payload.salary, "salary")?,
        })
    }
}

impl From<EmployeeUpdate> for EmployeePatch {
    fn from(payload: EmployeeUpdate) -> Self {
        Self {
            employee_id: payload.employee_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone_number: payload.phone_number,
            date_of_birth: payload.date_of_birth,
            department: payload.department,
            position: payload.position,
            date_of_joining: payload.date_of_joining,
            salary: payload.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload() -> EmployeeCreate {
        EmployeeCreate {
            employee_id: Some("E-001".into()),
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            email: Some("jane@example.com".into()),
            department: Some("Engineering".into()),
            date_of_joining: NaiveDate::from_ymd_opt(2023, 4, 1),
            salary: Some(85000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_employee_from_complete_payload() {
        let new = NewEmployee::try_from(create_payload()).unwrap();
        assert_eq!(new.employee_id, "E-001");
        assert_eq!(new.salary, 85000.0);

        let value = serde_json::to_value(&new).unwrap();
        assert_eq!(value["date_of_joining"], "2023-04-01");
        assert!(value.get("phone_number").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_new_employee_missing_field() {
        let mut payload = create_payload();
        payload.salary = None;
        let err = NewEmployee::try_from(payload).unwrap_err();
        assert!(matches!(err, RepoError::Validation(msg) if msg.contains("salary")));
    }

    #[test]
    fn test_patch_only_serializes_present_fields() {
        let patch = EmployeePatch::from(EmployeeUpdate {
            position: Some(Some("Lead".into())),
            ..Default::default()
        });
        assert!(!patch.is_empty());

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "position": "Lead" }));
        assert!(EmployeePatch::default().is_empty());
    }

    #[test]
    fn test_patch_keeps_explicit_clear() {
        let update: EmployeeUpdate =
            serde_json::from_value(serde_json::json!({ "phoneNumber": null, "salary": 10 }))
                .unwrap();
        let patch = EmployeePatch::from(update);
        assert!(!patch.is_empty());
        assert_eq!(patch.phone_number, Some(None));
        assert_eq!(patch.position, None);

        // 显式清空的字段会写出，未出现的字段不写
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "phone_number": null, "salary": 10.0 })
        );
    }

    #[test]
    fn test_row_reads_without_optionals() {
        let row: Employee = serde_json::from_value(serde_json::json!({
            "id": "employee:abc",
            "employee_id": "E-001",
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@example.com",
            "department": "Engineering",
            "date_of_joining": "2023-04-01",
            "salary": 85000
        }))
        .unwrap();

        assert_eq!(row.id.unwrap().to_string(), "employee:abc");
        assert!(row.phone_number.is_none());
        assert_eq!(row.salary, 85000.0);
    }
}
