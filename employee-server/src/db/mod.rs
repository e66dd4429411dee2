//! Database Module
//!
//! Handles the SurrealDB connection and the employee schema

pub mod filter;
pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::{Config, Result, ServerError};

/// 表结构定义，每次启动都会执行 (`IF NOT EXISTS`)
const SCHEMA: &str = include_str!("schema.surql");

/// Database service
///
/// 地址决定存储引擎：`mem://` 内存、`rocksdb://path` 本地文件、
/// `ws://host:port` 远程 SurrealDB 实例。
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// 连接数据库、选择 namespace/database 并应用 schema
    pub async fn connect(config: &Config) -> Result<Self> {
        let db = any::connect(config.database_url.as_str()).await?;

        if !config.is_embedded_database() {
            match (&config.database_user, &config.database_pass) {
                (Some(username), Some(password)) => {
                    db.signin(Root {
                        username: username.as_str(),
                        password: password.as_str(),
                    })
                    .await?;
                }
                (None, None) => {
                    tracing::warn!("DATABASE_USER / DATABASE_PASS not set, connecting without signin");
                }
                _ => {
                    return Err(ServerError::Config(
                        "DATABASE_USER and DATABASE_PASS must be set together".to_string(),
                    ));
                }
            }
        }

        db.use_ns(config.database_ns.as_str())
            .use_db(config.database_name.as_str())
            .await?;

        tracing::info!(
            url = %config.database_url,
            ns = %config.database_ns,
            db = %config.database_name,
            "Database connection established"
        );

        apply_schema(&db).await?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}

/// 执行 schema 语句，任何一条失败都视为启动失败
pub async fn apply_schema(db: &Surreal<Any>) -> Result<()> {
    db.query(SCHEMA).await?.check()?;
    Ok(())
}
