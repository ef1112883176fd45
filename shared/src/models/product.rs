//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// `department_id` is the product's *home* department — where direct sales
/// and supplier returns are booked when no other department is stated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Sales unit (buc, kg, l…)
    pub unit: String,
    pub department_id: i64,
    pub category_id: i64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub unit: Option<String>,
    pub department_id: i64,
    pub category_id: i64,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub department_id: Option<i64>,
    pub category_id: Option<i64>,
    pub is_active: Option<bool>,
}
