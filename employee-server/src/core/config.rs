/// 服务器配置 - 员工服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件会先被加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT (或 PORT) | 5000 | HTTP 服务端口 |
/// | DATABASE_URL | rocksdb://data/employees.db | SurrealDB 地址 (mem:// / rocksdb:// / ws://) |
/// | DATABASE_NS | employee_management | SurrealDB namespace |
/// | DATABASE_NAME | employees | SurrealDB database |
/// | DATABASE_USER | - | 远程数据库用户名 |
/// | DATABASE_PASS | - | 远程数据库密码 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志文件目录 (不设置则只输出到控制台) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=mem:// HTTP_PORT=8080 cargo run -p employee-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SurrealDB 连接地址
    pub database_url: String,
    /// SurrealDB namespace
    pub database_ns: String,
    /// SurrealDB database
    pub database_name: String,
    /// 远程数据库凭据 (仅 ws:// 等远程地址使用)
    pub database_user: Option<String>,
    pub database_pass: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
}

pub const DEFAULT_HTTP_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "rocksdb://data/employees.db";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            database_ns: std::env::var("DATABASE_NS")
                .unwrap_or_else(|_| "employee_management".into()),
            database_name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "employees".into()),
            database_user: std::env::var("DATABASE_USER").ok().filter(|v| !v.is_empty()),
            database_pass: std::env::var("DATABASE_PASS").ok().filter(|v| !v.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 数据库地址是否为嵌入式引擎 (无需登录)
    pub fn is_embedded_database(&self) -> bool {
        self.database_url.starts_with("mem://") || self.database_url.starts_with("rocksdb://")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
