//! Employee Server - 员工管理 REST 服务
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): `/api/employees` CRUD 与搜索、健康检查
//! - **数据库** (`db`): SurrealDB 存储、过滤条件构建、仓储
//! - **核心** (`core`): 配置、状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 路由组装、中间件
//! ├── utils/         # 日志、校验、错误转换
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use services::build_router;
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// 加载 `.env`、读取配置并初始化日志
///
/// 生产环境使用 JSON 日志；设置了 `LOG_DIR` 时同时写入按天滚动的文件，
/// 并清理过期文件。
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env 不存在不是错误
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;

    if let Some(dir) = config.log_dir.as_deref() {
        let removed = cleanup_old_logs(
            std::path::Path::new(dir),
            utils::logger::LOG_RETENTION_DAYS,
        )?;
        if removed > 0 {
            tracing::info!(removed, "Old log files cleaned up");
        }
    }

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___ ___  ____  / /___  __  _____  ___
  / __/ / __ `__ \/ __ \/ / __ \/ / / / _ \/ _ \
 / /___/ / / / / / /_/ / / /_/ / /_/ /  __/  __/
/_____/_/ /_/ /_/ .___/_/\____/\__, /\___/\___/
               /_/            /____/
    "#
    );
}
