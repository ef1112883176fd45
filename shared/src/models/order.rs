//! Order Model
//!
//! A table order. Closing it with a payment method is the side-effecting
//! stock event: recipe products consume their ingredients, recipe-less
//! products consume their own stock.

use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    Open,
    Delivered,
    Closed,
}

/// Order header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// Table label as shown on the floor plan ("M5", "Terasa 2"…)
    pub table_label: String,
    pub status: OrderStatus,
    /// Payment method, set on close (cash, card…)
    pub pay_method: Option<String>,
    /// Waiter who opened the order
    pub user_id: Option<i64>,
    pub created_at: i64,
    pub closed_at: Option<i64>,
}

/// Order line item
///
/// `price` is the product's sale price captured at the time the line was
/// added, so later price edits don't rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: f64,
    pub price: f64,
}

/// Order line input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: i64,
    pub quantity: f64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_label: String,
    pub user_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
}

/// Close order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderClose {
    pub pay_method: String,
}

/// Order line joined with product name, for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItemView {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: f64,
    pub price: f64,
}

/// Order with items resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFull {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemView>,
}
