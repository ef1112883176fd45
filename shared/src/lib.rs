//! Shared types for the HoReCa POS backend
//!
//! This crate holds everything the server and its clients agree on:
//!
//! - **Models** (`models`): entity structs and their Create/Update payloads
//! - **Errors** (`error`): unified error codes, [`error::AppError`] and the
//!   [`error::ApiResponse`] envelope
//! - **Client DTOs** (`client`): login request/response
//! - **Utilities** (`util`): millisecond timestamps and snowflake IDs
//!
//! With the `db` feature enabled, models additionally derive
//! `sqlx::FromRow` so the server can map SQLite rows directly.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
