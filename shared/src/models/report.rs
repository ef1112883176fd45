//! Report Models

use serde::{Deserialize, Serialize};

/// Sales of one product over the report window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductSales {
    pub product_id: i64,
    pub product_name: String,
    pub quantity_sold: f64,
    pub revenue: f64,
}

/// Sales report over closed orders in [from, to)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    pub from: i64,
    pub to: i64,
    pub order_count: i64,
    pub total_revenue: f64,
    pub top_products: Vec<ProductSales>,
}
