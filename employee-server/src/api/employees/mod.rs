//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/employees | GET | 列表 (employeeId / name / department / dateFrom+dateTo) |
//! | /api/employees | POST | 新建 |
//! | /api/employees/search | GET | 搜索 (不按日期过滤) |
//! | /api/employees/{id} | GET | 详情 |
//! | /api/employees/{id} | PUT | 部分更新 |
//! | /api/employees/{id} | DELETE | 删除 (幂等) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search", get(handler::search))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
