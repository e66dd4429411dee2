//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::filter::EmployeeFilter;
use crate::db::models::{Employee, EmployeePatch, NewEmployee};
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "employee";

const EMAIL_INDEX: &str = "employee_email_unique";
const EMPLOYEE_ID_INDEX: &str = "employee_employee_id_unique";

/// 解析路径里的员工 ID
///
/// 接受 "employee:key" 或裸 key；其他表的 ID 视为非法。
pub fn parse_employee_id(raw: &str) -> RepoResult<RecordId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RepoError::InvalidId("empty id".to_string()));
    }

    if !raw.contains(':') {
        return Ok(RecordId::from_table_key(TABLE, raw.to_string()));
    }

    let thing: RecordId = raw
        .parse()
        .map_err(|_| RepoError::InvalidId(raw.to_string()))?;
    if thing.table() != TABLE {
        return Err(RepoError::InvalidId(raw.to_string()));
    }
    Ok(thing)
}

/// 写操作的存储错误：唯一索引冲突转为 Duplicate
fn write_error(err: surrealdb::Error) -> RepoError {
    let message = err.to_string();
    if message.contains("already contains") {
        let field = if message.contains(EMAIL_INDEX) {
            "email"
        } else if message.contains(EMPLOYEE_ID_INDEX) {
            "employeeId"
        } else {
            return RepoError::Database(message);
        };
        return RepoError::Duplicate { field, message };
    }
    RepoError::Database(message)
}

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find employees matching a filter, ordered by employee_id
    pub async fn find(&self, filter: &EmployeeFilter) -> RepoResult<Vec<Employee>> {
        let mut query = self.base.db().query(filter.to_select(TABLE));
        for bind in filter.bindings() {
            query = query.bind(bind);
        }
        let employees: Vec<Employee> = query.await?.take(0)?;
        Ok(employees)
    }

    /// Find employee by internal id ("employee:key" or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = parse_employee_id(id)?;
        self.find_by_record(&thing).await
    }

    /// Find employee by record id
    pub async fn find_by_record(&self, thing: &RecordId) -> RepoResult<Option<Employee>> {
        let emp: Option<Employee> = self.base.db().select(thing.clone()).await?;
        Ok(emp)
    }

    /// Find employee by business identifier
    pub async fn find_by_employee_id(&self, employee_id: &str) -> RepoResult<Option<Employee>> {
        self.find_one_by("employee_id", employee_id).await
    }

    /// Find employee by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        self.find_one_by("email", email).await
    }

    async fn find_one_by(&self, field: &'static str, value: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query(format!("SELECT * FROM {} WHERE {} = $value", TABLE, field))
            .bind(("value", value.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// employeeId / email 唯一性检查，`exclude` 为正在更新的记录自身
    async fn ensure_unique(
        &self,
        employee_id: Option<&str>,
        email: Option<&str>,
        exclude: Option<&RecordId>,
    ) -> RepoResult<()> {
        let is_other = |existing: &Employee| match exclude {
            Some(id) => existing.id.as_ref() != Some(id),
            None => true,
        };

        if let Some(employee_id) = employee_id
            && let Some(existing) = self.find_by_employee_id(employee_id).await?
            && is_other(&existing)
        {
            return Err(RepoError::Duplicate {
                field: "employeeId",
                message: format!("Employee ID '{}' already exists", employee_id),
            });
        }

        if let Some(email) = email
            && let Some(existing) = self.find_by_email(email).await?
            && is_other(&existing)
        {
            return Err(RepoError::Duplicate {
                field: "email",
                message: format!("Email '{}' already exists", email),
            });
        }

        Ok(())
    }

    /// Create a new employee
    ///
    /// 并发创建时输掉的一方可能只拿到事务冲突，此时重新检查唯一性，
    /// 冲突仍然报告为 Duplicate。
    pub async fn create(&self, data: NewEmployee) -> RepoResult<Employee> {
        let employee_id = data.employee_id.clone();
        let email = data.email.clone();
        self.ensure_unique(Some(employee_id.as_str()), Some(email.as_str()), None)
            .await?;

        match self.insert(data).await {
            Err(RepoError::Database(message)) => {
                self.ensure_unique(Some(employee_id.as_str()), Some(email.as_str()), None)
                    .await?;
                Err(RepoError::Database(message))
            }
            other => other,
        }
    }

    async fn insert(&self, data: NewEmployee) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query("CREATE employee CONTENT $data RETURN AFTER")
            .bind(("data", data))
            .await
            .map_err(write_error)?;

        let created: Option<Employee> = result.take(0).map_err(write_error)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Merge the present fields into an existing employee
    pub async fn update(&self, id: &str, data: EmployeePatch) -> RepoResult<Employee> {
        let thing = parse_employee_id(id)?;
        let existing = self
            .find_by_record(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        if data.is_empty() {
            return Ok(existing);
        }

        self.ensure_unique(data.employee_id.as_deref(), data.email.as_deref(), Some(&thing))
            .await?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", data))
            .await
            .map_err(write_error)?;

        result
            .take::<Option<Employee>>(0)
            .map_err(write_error)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee
    ///
    /// 返回记录之前是否存在；不存在时什么也不做。
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_employee_id(id)?;
        let mut result = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", thing))
            .await?;
        let removed: Vec<Employee> = result.take(0)?;
        Ok(!removed.is_empty())
    }

    /// 数据库连通性检查
    pub async fn ping(&self) -> RepoResult<()> {
        self.base.db().health().await?;
        Ok(())
    }
}
