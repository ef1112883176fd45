//! 统一错误处理
//!
//! Re-exports the unified error types from `shared::error`. The repository
//! layer's `RepoError` converts into [`AppError`] (see `db::repository`),
//! so handlers propagate everything with `?`.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
