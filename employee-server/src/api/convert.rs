//! 存储模型 -> API 模型
//!
//! 存储层使用 RecordId 和 snake_case，对外统一为 "employee:key" 字符串。

use crate::db::models as db;
use shared::models as api;

impl From<db::Employee> for api::Employee {
    fn from(e: db::Employee) -> Self {
        Self {
            id: e.id.map(|id| id.to_string()).unwrap_or_default(),
            employee_id: e.employee_id,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            phone_number: e.phone_number,
            date_of_birth: e.date_of_birth,
            department: e.department,
            position: e.position,
            date_of_joining: e.date_of_joining,
            salary: e.salary,
        }
    }
}
