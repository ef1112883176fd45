//! Inventory Model (physical count)
//!
//! A point-in-time snapshot of the stock ledger paired with manually
//! counted quantities. The computed difference is informational only —
//! it is never written back to the stock ledger.

use serde::{Deserialize, Serialize};

/// Inventory count header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Inventory {
    pub id: i64,
    /// Optional department filter the snapshot was taken with
    pub department_id: Option<i64>,
    pub created_at: i64,
}

/// One counted line of an inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InventoryItem {
    pub id: i64,
    pub inventory_id: i64,
    pub product_id: i64,
    pub department_id: i64,
    /// Ledger quantity at snapshot time
    pub system_qty: f64,
    /// Physically counted quantity (defaults to system_qty until corrected)
    pub actual_qty: f64,
    /// actual_qty − system_qty
    pub difference: f64,
}

/// Create inventory payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryCreate {
    pub department_id: Option<i64>,
}

/// Corrected count for one inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemCorrection {
    pub item_id: i64,
    pub actual_qty: f64,
}

/// Update inventory payload (corrected counts)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub items: Vec<InventoryItemCorrection>,
}

/// Inventory with items resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryFull {
    #[serde(flatten)]
    pub inventory: Inventory,
    pub items: Vec<InventoryItem>,
}
