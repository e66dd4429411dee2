//! 统一错误处理
//!
//! 错误类型来自 `shared::error`；这里补充 axum 提取器拒绝的转换。
//!
//! axum 默认对 JSON 类型错误返回 422，本服务统一为 400 `InvalidFormat`。

use axum::extract::rejection::{JsonRejection, QueryRejection};

pub use shared::error::{AppError, AppResult, ErrorCode};

/// JSON 请求体解析失败
pub fn json_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
    AppError::invalid_format(rejection.body_text())
}

/// 查询参数解析失败
pub fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::invalid_request(rejection.body_text())
}
