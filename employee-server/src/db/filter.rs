//! Employee list filter
//!
//! 把 `GET /api/employees` 和 `/search` 的查询参数转成 SurrealQL 条件。
//!
//! 规则：
//! - 空字符串等同于未提供
//! - `employeeId` / `department` 精确匹配
//! - `name` 对 first_name 或 last_name 做不区分大小写的子串匹配 (字面量，不是正则)
//! - 日期区间只有两端都提供时才生效，闭区间；只给一端则忽略
//! - 日期参数按时刻比较：入职日期视为当天 00:00 UTC，
//!   所以 `dateFrom=2024-01-01T12:00:00Z` 不包含 2024-01-01 入职的员工

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use shared::models::{EmployeeQuery, EmployeeSearchQuery};
use shared::util::parse_instant;
use thiserror::Error;

use crate::db::models::Employee;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid date for {param}: {value}")]
    InvalidDate { param: &'static str, value: String },
}

/// 已解析的员工过滤条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub employee_id: Option<String>,
    /// 已转小写
    pub name: Option<String>,
    pub department: Option<String>,
    /// (first, last) 入职日期，两端都包含
    pub joined_between: Option<(NaiveDate, NaiveDate)>,
}

fn present(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

fn date_param(param: &'static str, value: &str) -> Result<DateTime<Utc>, FilterError> {
    parse_instant(value).ok_or_else(|| FilterError::InvalidDate {
        param,
        value: value.to_string(),
    })
}

/// 第一个 00:00 UTC 不早于 `from` 的日期
fn first_day_from(from: DateTime<Utc>) -> NaiveDate {
    let date = from.date_naive();
    if from.time() == NaiveTime::MIN {
        date
    } else {
        date.succ_opt().unwrap_or(NaiveDate::MAX)
    }
}

impl EmployeeFilter {
    /// 不带任何条件
    pub fn all() -> Self {
        Self::default()
    }

    fn build(
        employee_id: Option<&String>,
        name: Option<&String>,
        department: Option<&String>,
    ) -> Self {
        Self {
            employee_id: present(employee_id),
            name: present(name).map(|n| n.to_lowercase()),
            department: present(department),
            joined_between: None,
        }
    }

    fn with_joined_between(
        mut self,
        date_from: Option<&String>,
        date_to: Option<&String>,
    ) -> Result<Self, FilterError> {
        if let (Some(from), Some(to)) = (present(date_from), present(date_to)) {
            let from = date_param("dateFrom", &from)?;
            let to = date_param("dateTo", &to)?;
            self.joined_between = Some((first_day_from(from), to.date_naive()));
        }
        Ok(self)
    }

    /// `GET /api/employees` 参数
    pub fn from_query(query: &EmployeeQuery) -> Result<Self, FilterError> {
        Self::build(
            query.employee_id.as_ref(),
            query.name.as_ref(),
            query.department.as_ref(),
        )
        .with_joined_between(query.date_from.as_ref(), query.date_to.as_ref())
    }

    /// `GET /api/employees/search` 参数
    ///
    /// `startDate` / `endDate` 不参与过滤。
    pub fn from_search(query: &EmployeeSearchQuery) -> Self {
        Self::build(
            query.employee_id.as_ref(),
            query.name.as_ref(),
            query.department.as_ref(),
        )
    }

    /// WHERE 子句 (不含 `WHERE` 关键字)，无条件时返回 None
    pub fn where_clause(&self) -> Option<String> {
        let mut conditions = Vec::new();

        if self.employee_id.is_some() {
            conditions.push("employee_id = $employee_id".to_string());
        }
        if self.name.is_some() {
            conditions.push(
                "(string::contains(string::lowercase(first_name), $name) \
                 OR string::contains(string::lowercase(last_name), $name))"
                    .to_string(),
            );
        }
        if self.department.is_some() {
            conditions.push("department = $department".to_string());
        }
        if self.joined_between.is_some() {
            conditions.push(
                "(date_of_joining >= $date_from AND date_of_joining <= $date_to)".to_string(),
            );
        }

        if conditions.is_empty() {
            None
        } else {
            Some(conditions.join(" AND "))
        }
    }

    /// 与 [`where_clause`](Self::where_clause) 对应的绑定参数
    pub fn bindings(&self) -> Vec<(&'static str, String)> {
        let mut binds = Vec::new();
        if let Some(employee_id) = &self.employee_id {
            binds.push(("employee_id", employee_id.clone()));
        }
        if let Some(name) = &self.name {
            binds.push(("name", name.clone()));
        }
        if let Some(department) = &self.department {
            binds.push(("department", department.clone()));
        }
        if let Some((from, to)) = &self.joined_between {
            binds.push(("date_from", from.format("%Y-%m-%d").to_string()));
            binds.push(("date_to", to.format("%Y-%m-%d").to_string()));
        }
        binds
    }

    /// 完整的 SELECT 语句，按 employee_id 排序
    pub fn to_select(&self, table: &str) -> String {
        match self.where_clause() {
            Some(clause) => format!("SELECT * FROM {} WHERE {} ORDER BY employee_id", table, clause),
            None => format!("SELECT * FROM {} ORDER BY employee_id", table),
        }
    }

    /// 在内存里对单条记录求值，语义与 WHERE 子句一致
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(employee_id) = &self.employee_id
            && &employee.employee_id != employee_id
        {
            return false;
        }
        if let Some(name) = &self.name
            && !employee.first_name.to_lowercase().contains(name.as_str())
            && !employee.last_name.to_lowercase().contains(name.as_str())
        {
            return false;
        }
        if let Some(department) = &self.department
            && &employee.department != department
        {
            return false;
        }
        if let Some((from, to)) = &self.joined_between
            && (employee.date_of_joining < *from || employee.date_of_joining > *to)
        {
            return false;
        }
        true
    }
}
