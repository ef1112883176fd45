//! Supplier API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::supplier;
use crate::utils::{AppError, AppResult};
use shared::models::{Supplier, SupplierCreate, SupplierUpdate};

/// GET /api/suppliers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Supplier>>> {
    let suppliers = supplier::find_all(&state.db).await?;
    Ok(Json(suppliers))
}

/// GET /api/suppliers/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Supplier>> {
    let supplier = supplier::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Supplier {}", id)))?;
    Ok(Json(supplier))
}

/// POST /api/suppliers
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SupplierCreate>,
) -> AppResult<Json<Supplier>> {
    let supplier = supplier::create(&state.db, payload).await?;
    Ok(Json(supplier))
}

/// PUT /api/suppliers/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SupplierUpdate>,
) -> AppResult<Json<Supplier>> {
    let supplier = supplier::update(&state.db, id, payload).await?;
    Ok(Json(supplier))
}

/// DELETE /api/suppliers/:id (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = supplier::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Supplier {}", id)));
    }
    Ok(Json(true))
}
