use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 每个请求共享的句柄
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Any> | 数据库连接 (mem / rocksdb / ws) |
///
/// `Surreal` 内部是 Arc，clone 成本很低。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库连接
    pub db: Surreal<Any>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试里可以传入自己的连接。
    pub fn new(config: Config, db: Surreal<Any>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 连接数据库并应用 schema。任何一步失败都直接返回错误，
    /// 服务不会在没有存储的情况下启动。
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = DbService::connect(config).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> Surreal<Any> {
        self.db.clone()
    }
}
