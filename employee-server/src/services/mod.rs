//! 服务模块
//!
//! - [`http`] - 路由组装与中间件

pub mod http;

pub use http::{build_app, build_router};
