//! Retur API Handlers (return to supplier)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::retur;
use crate::utils::{AppError, AppResult};
use shared::models::{Retur, ReturCreate, ReturFull};

/// GET /api/returs - 退货单列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Retur>>> {
    let returs = retur::find_all(&state.db).await?;
    Ok(Json(returs))
}

/// GET /api/returs/:id - 退货单详情 (含明细)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ReturFull>> {
    let retur = retur::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Retur {}", id)))?;
    Ok(Json(retur))
}

/// POST /api/returs - 创建退货单并减少库存
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReturCreate>,
) -> AppResult<Json<ReturFull>> {
    let retur = retur::create(&state.db, payload).await?;
    Ok(Json(retur))
}
