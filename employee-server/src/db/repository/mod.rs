//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod employee;

pub use employee::EmployeeRepository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// 唯一字段冲突，`field` 为 API 字段名 (employeeId / email)
    #[error("Duplicate {field}: {message}")]
    Duplicate {
        field: &'static str,
        message: String,
    },

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID 约定: "table:key" 字符串
// =============================================================================
//
//   - 解析: let id: RecordId = "employee:abc".parse()?;
//   - 创建: let id = RecordId::from_table_key("employee", "abc");
//   - 表名: id.table()
//   - CRUD: db.select(id) 或在语句中绑定 $thing

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}
