//! User API Handlers
//!
//! Back-office user management. Responses include the stored PIN — the
//! admin screen edits it in place, and this system treats PINs as plain
//! strings, not secrets.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{AppError, AppResult};
use shared::models::{User, UserCreate, UserUpdate};

/// GET /api/users
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let users = user::find_all(&state.db).await?;
    Ok(Json(users))
}

/// GET /api/users/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = user::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", id)))?;
    Ok(Json(user))
}

/// POST /api/users
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    let user = user::create(&state.db, payload).await?;
    Ok(Json(user))
}

/// PUT /api/users/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    let user = user::update(&state.db, id, payload).await?;
    Ok(Json(user))
}

/// DELETE /api/users/:id (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = user::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("User {}", id)));
    }
    Ok(Json(true))
}
