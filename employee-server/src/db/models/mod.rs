//! Database Models
//!
//! 存储层的行结构；字段名使用 snake_case，与 schema.surql 一致。

pub mod employee;
pub mod serde_helpers;

pub use employee::{Employee, EmployeePatch, NewEmployee};
