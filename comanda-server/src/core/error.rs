use thiserror::Error;

/// 服务器启动/运行错误
///
/// 请求级错误使用 [`shared::AppError`]，这里只覆盖进程级故障。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法监听 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
