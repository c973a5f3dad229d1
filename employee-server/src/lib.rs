//! Employee Server - 员工档案管理 REST 服务
//!
//! # 架构概述
//!
//! 请求按直线管道流动：
//!
//! ```text
//! HTTP (api) → EmployeeService (services) → EmployeeStore (db::repository) → SQLite
//! ```
//!
//! - **HTTP API** (`api`): axum 路由与处理器，只做协议转换
//! - **业务服务** (`services`): 唯一的业务规则，更新必须针对已存在的记录
//! - **数据库** (`db`): SQLite 连接池、迁移与存储实现
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务逻辑
//! ├── db/            # 数据库层
//! └── utils/         # 错误、提取器、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_router};
pub use services::{EmployeeError, EmployeeService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 `.env`，按配置初始化日志
///
/// 返回加载好的配置
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
  ___            _
 | __|_ __  _ __| |___ _  _ ___ ___
 | _|| '  \| '_ \ / _ \ || / -_) -_)
 |___|_|_|_| .__/_\___/\_, \___\___|
           |_|         |__/
    "#
    );
}
