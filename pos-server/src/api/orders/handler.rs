//! Order API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderClose, OrderCreate, OrderFull, OrderItemInput, OrderStatus};

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
}

/// GET /api/orders?status= - 订单列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(&state.db, query.status).await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - 订单详情 (含明细)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderFull>> {
    let order = order::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;
    Ok(Json(order))
}

/// POST /api/orders - 开单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderFull>> {
    let order = order::create(&state.db, payload).await?;
    Ok(Json(order))
}

/// POST /api/orders/:id/items - 追加明细
pub async fn add_items(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(items): Json<Vec<OrderItemInput>>,
) -> AppResult<Json<OrderFull>> {
    let order = order::add_items(&state.db, id, &items).await?;
    Ok(Json(order))
}

/// PUT /api/orders/:id/deliver - 出餐
pub async fn deliver(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderFull>> {
    let order = order::deliver(&state.db, id).await?;
    Ok(Json(order))
}

/// PUT /api/orders/:id/close - 结账并扣减库存
pub async fn close(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderClose>,
) -> AppResult<Json<OrderFull>> {
    let order = order::close(&state.db, id, &payload.pay_method).await?;
    Ok(Json(order))
}
