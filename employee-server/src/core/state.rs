use std::sync::Arc;

use crate::core::Config;
use crate::db::{DbService, IN_MEMORY};
use crate::db::repository::SqliteEmployeeStore;
use crate::services::EmployeeService;
use crate::utils::AppResult;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是廉价克隆 (连接池与 Arc)，每个请求持有一份拷贝。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | employees | EmployeeService | 员工业务服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    /// 员工服务
    pub employees: EmployeeService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: DbService, employees: EmployeeService) -> Self {
        Self {
            config,
            db,
            employees,
        }
    }

    /// 初始化服务器状态
    ///
    /// 打开数据库、执行迁移，并把 SQLite 存储注入员工服务
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        if config.is_production() && config.database_path == IN_MEMORY {
            tracing::warn!("Running production with an in-memory database, data will not survive restarts");
        }

        let db = DbService::new(&config.database_path, config.db_max_connections).await?;
        let store = Arc::new(SqliteEmployeeStore::new(db.pool.clone()));
        let employees = EmployeeService::new(store);

        Ok(Self::new(config.clone(), db, employees))
    }
}
