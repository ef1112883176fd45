//! Recipe API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::recipe;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{RecipeCreate, RecipeFull};

/// GET /api/recipes - 获取所有配方
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<RecipeFull>>> {
    let recipes = recipe::find_all(&state.db).await?;
    Ok(Json(recipes))
}

/// GET /api/recipes/by-product/:product_id
pub async fn get_by_product(
    State(state): State<ServerState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<RecipeFull>> {
    let recipe = recipe::find_by_product(&state.db, product_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::RecipeNotFound,
                format!("No recipe for product {}", product_id),
            )
        })?;
    Ok(Json(recipe))
}

/// POST /api/recipes - 创建或替换商品配方
pub async fn create_or_replace(
    State(state): State<ServerState>,
    Json(payload): Json<RecipeCreate>,
) -> AppResult<Json<RecipeFull>> {
    let recipe = recipe::create_or_replace(&state.db, payload).await?;
    Ok(Json(recipe))
}

/// DELETE /api/recipes/:id - 删除配方 (商品恢复直接扣减库存)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let header = recipe::find_header_by_id(&state.db, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::RecipeNotFound, format!("Recipe {} not found", id))
    })?;
    recipe::delete(&state.db, header.id).await?;
    Ok(Json(true))
}
