//! Transfer API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::transfer;
use crate::utils::{AppError, AppResult};
use shared::models::{Transfer, TransferCreate, TransferFull};

/// GET /api/transfers - 调拨单列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Transfer>>> {
    let transfers = transfer::find_all(&state.db).await?;
    Ok(Json(transfers))
}

/// GET /api/transfers/:id - 调拨单详情 (含明细)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<TransferFull>> {
    let transfer = transfer::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Transfer {}", id)))?;
    Ok(Json(transfer))
}

/// POST /api/transfers - 创建调拨单并移动库存
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransferCreate>,
) -> AppResult<Json<TransferFull>> {
    let transfer = transfer::create(&state.db, payload).await?;
    Ok(Json(transfer))
}
