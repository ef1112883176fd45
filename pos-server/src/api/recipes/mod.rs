//! Recipe API 模块

mod handler;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/recipes", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create_or_replace))
        .route("/{id}", delete(handler::delete))
        .route("/by-product/{product_id}", get(handler::get_by_product))
}
