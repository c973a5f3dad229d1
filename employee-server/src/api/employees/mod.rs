//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/employees | GET | 全部员工 |
//! | /api/employees | POST | 新建员工 |
//! | /api/employees/{id} | GET | 单个员工 (404 不存在) |
//! | /api/employees/{id} | PUT | 更新员工 (404 不存在) |
//! | /api/employees/{id} | DELETE | 删除员工 (不存在时也成功) |

mod handler;

pub use handler::DELETED_MESSAGE;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
