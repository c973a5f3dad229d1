//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppJson`] - 统一错误格式的 JSON 提取器
//! - 日志初始化

pub mod error;
pub mod extract;
pub mod logger;
pub mod result;

pub use error::{AppError, AppResponse};
pub use extract::AppJson;
pub use result::AppResult;
