//! Authentication Handlers
//!
//! PIN login: an exact-string lookup against the stored PIN. No hashing and
//! no token issuance — the terminal keeps the returned identity locally.

use std::time::Duration;

use axum::{extract::State, Json};

use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{AppError, AppResult};
use shared::client::{LoginRequest, LoginResponse};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 200;

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if req.pin.trim().is_empty() {
        return Err(AppError::validation("pin is required"));
    }

    let found = user::find_by_pin(&state.db, &req.pin).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent PIN enumeration
    let user = match found {
        Some(u) => {
            if !u.is_active {
                tracing::warn!(user_id = u.id, "Login rejected - account disabled");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            tracing::warn!("Login failed - no user for submitted PIN");
            return Err(AppError::invalid_credentials());
        }
    };

    tracing::info!(
        user_id = user.id,
        name = %user.name,
        role = user.role.as_str(),
        "User logged in"
    );

    Ok(Json(LoginResponse {
        id: user.id,
        name: user.name,
        role: user.role,
    }))
}
