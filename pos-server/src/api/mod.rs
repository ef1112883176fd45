//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - PIN 登录
//! - [`users`] - 用户管理接口
//! - [`departments`] - 部门管理接口
//! - [`categories`] - 分类管理接口
//! - [`suppliers`] - 供应商管理接口
//! - [`products`] - 商品管理接口
//! - [`recipes`] - 配方管理接口
//! - [`stock`] - 库存与流水查询接口
//! - [`nir`] - 入库单接口
//! - [`transfers`] - 调拨单接口
//! - [`returs`] - 退货单接口
//! - [`inventories`] - 盘点接口
//! - [`orders`] - 订单接口
//! - [`reports`] - 报表接口

pub mod auth;
pub mod health;

// Catalog APIs
pub mod categories;
pub mod departments;
pub mod products;
pub mod suppliers;
pub mod users;

// Stock APIs
pub mod inventories;
pub mod nir;
pub mod recipes;
pub mod returs;
pub mod stock;
pub mod transfers;

// Sales APIs
pub mod orders;
pub mod reports;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(auth::router())
        .merge(health::router())
        // Catalog APIs
        .merge(users::router())
        .merge(departments::router())
        .merge(categories::router())
        .merge(suppliers::router())
        .merge(products::router())
        // Stock APIs
        .merge(recipes::router())
        .merge(stock::router())
        .merge(nir::router())
        .merge(transfers::router())
        .merge(returs::router())
        .merge(inventories::router())
        // Sales APIs
        .merge(orders::router())
        .merge(reports::router())
}
