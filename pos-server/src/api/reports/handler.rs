//! Report API Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::report;
use crate::utils::{AppError, AppResult};
use shared::models::SalesReport;

#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    /// Window start, UTC millis (default: 0)
    pub from: Option<i64>,
    /// Window end, UTC millis, exclusive (default: now)
    pub to: Option<i64>,
}

/// GET /api/reports/sales?from=&to= - 销售报表
pub async fn sales(
    State(state): State<ServerState>,
    Query(query): Query<SalesQuery>,
) -> AppResult<Json<SalesReport>> {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or_else(shared::util::now_millis);
    if from > to {
        return Err(AppError::validation("from must not be after to"));
    }

    let report = report::sales(&state.db, from, to).await?;
    Ok(Json(report))
}
