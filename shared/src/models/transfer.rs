//! Transfer Model
//!
//! Moves product quantities from one department to another. Side-effecting:
//! decrements source stock, increments destination stock, atomically.

use serde::{Deserialize, Serialize};

/// Transfer document header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Transfer {
    pub id: i64,
    pub from_department_id: i64,
    pub to_department_id: i64,
    pub note: Option<String>,
    pub created_at: i64,
}

/// Transfer line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TransferItem {
    pub id: i64,
    pub transfer_id: i64,
    pub product_id: i64,
    pub quantity: f64,
}

/// Transfer line input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferItemInput {
    pub product_id: i64,
    pub quantity: f64,
}

/// Create transfer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferCreate {
    pub from_department_id: i64,
    pub to_department_id: i64,
    pub note: Option<String>,
    pub items: Vec<TransferItemInput>,
}

/// Transfer with items resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferFull {
    #[serde(flatten)]
    pub transfer: Transfer,
    pub items: Vec<TransferItem>,
}
