//! NIR API Handlers (goods receipt)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::nir;
use crate::utils::{AppError, AppResult};
use shared::models::{Nir, NirCreate, NirFull};

/// GET /api/nir - 入库单列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Nir>>> {
    let nirs = nir::find_all(&state.db).await?;
    Ok(Json(nirs))
}

/// GET /api/nir/:id - 入库单详情 (含明细)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<NirFull>> {
    let nir = nir::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("NIR {}", id)))?;
    Ok(Json(nir))
}

/// POST /api/nir - 创建入库单并增加库存
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<NirCreate>,
) -> AppResult<Json<NirFull>> {
    let nir = nir::create(&state.db, payload).await?;
    Ok(Json(nir))
}
