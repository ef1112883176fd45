//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::UserRole;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (PIN pad)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub pin: String,
}

/// Login response data
///
/// No token: the terminal keeps the returned identity locally and sends it
/// with subsequent requests where relevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
}
