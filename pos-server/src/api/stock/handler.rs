//! Stock API Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::stock;
use crate::utils::AppResult;
use shared::models::{StockMovement, StockView};

/// Default and maximum page size for the movement journal
const DEFAULT_MOVEMENT_LIMIT: i64 = 100;
const MAX_MOVEMENT_LIMIT: i64 = 1000;

#[derive(Debug, Deserialize)]
pub struct StockQuery {
    pub department_id: Option<i64>,
}

/// GET /api/stock?department_id= - 当前库存
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<StockQuery>,
) -> AppResult<Json<Vec<StockView>>> {
    let rows = stock::find_all(&state.db, query.department_id).await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct MovementQuery {
    pub product_id: Option<i64>,
    pub department_id: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/stock/movements - 库存流水 (最新优先)
pub async fn movements(
    State(state): State<ServerState>,
    Query(query): Query<MovementQuery>,
) -> AppResult<Json<Vec<StockMovement>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_MOVEMENT_LIMIT)
        .clamp(1, MAX_MOVEMENT_LIMIT);
    let rows =
        stock::find_movements(&state.db, query.product_id, query.department_id, limit).await?;
    Ok(Json(rows))
}
