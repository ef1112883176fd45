//! Inventory API Handlers (physical count)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::inventory;
use crate::utils::{AppError, AppResult};
use shared::models::{Inventory, InventoryCreate, InventoryFull, InventoryUpdate};

/// GET /api/inventories - 盘点列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Inventory>>> {
    let inventories = inventory::find_all(&state.db).await?;
    Ok(Json(inventories))
}

/// GET /api/inventories/:id - 盘点详情 (含明细)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InventoryFull>> {
    let inventory = inventory::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Inventory {}", id)))?;
    Ok(Json(inventory))
}

/// POST /api/inventories - 创建库存快照
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryCreate>,
) -> AppResult<Json<InventoryFull>> {
    let inventory = inventory::create(&state.db, payload).await?;
    Ok(Json(inventory))
}

/// PUT /api/inventories/:id - 录入实盘数量 (不回写库存)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<InventoryUpdate>,
) -> AppResult<Json<InventoryFull>> {
    let inventory = inventory::update(&state.db, id, payload).await?;
    Ok(Json(inventory))
}
