//! Department API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::department;
use crate::utils::{AppError, AppResult};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};

/// GET /api/departments
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Department>>> {
    let departments = department::find_all(&state.db).await?;
    Ok(Json(departments))
}

/// GET /api/departments/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Department>> {
    let department = department::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {}", id)))?;
    Ok(Json(department))
}

/// POST /api/departments
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    let department = department::create(&state.db, payload).await?;
    Ok(Json(department))
}

/// PUT /api/departments/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    let department = department::update(&state.db, id, payload).await?;
    Ok(Json(department))
}

/// DELETE /api/departments/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = department::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Department {}", id)));
    }
    Ok(Json(true))
}
