use thiserror::Error;

use crate::utils::AppError;

/// 服务器生命周期错误 (启动、监听、运行)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error(transparent)]
    Startup(#[from] AppError),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
