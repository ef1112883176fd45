use thiserror::Error;

/// Top-level server error — startup and serve failures only.
///
/// Request-level errors use `shared::AppError`; this type covers what can
/// go wrong before a request ever reaches a handler.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 处理器的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
