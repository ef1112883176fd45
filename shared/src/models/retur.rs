//! Retur Model (return to supplier)
//!
//! Side-effecting: decrements stock at each product's home department as
//! recorded at the time the return is written.

use serde::{Deserialize, Serialize};

/// Return document header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Retur {
    pub id: i64,
    pub supplier_id: i64,
    pub reason: Option<String>,
    pub created_at: i64,
}

/// Return line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ReturItem {
    pub id: i64,
    pub retur_id: i64,
    pub product_id: i64,
    pub quantity: f64,
}

/// Return line input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturItemInput {
    pub product_id: i64,
    pub quantity: f64,
}

/// Create return payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturCreate {
    pub supplier_id: i64,
    pub reason: Option<String>,
    pub items: Vec<ReturItemInput>,
}

/// Return with items resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturFull {
    #[serde(flatten)]
    pub retur: Retur,
    pub items: Vec<ReturItem>,
}
