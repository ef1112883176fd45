//! Stock Model
//!
//! The quantity-on-hand ledger, keyed by (product, department), together
//! with the append-only movement journal that feeds it.

use serde::{Deserialize, Serialize};

/// A stock ledger row — running quantity for one (product, department) pair.
///
/// Rows are created lazily on first movement. Quantity may go negative when
/// consumption outruns recorded receipts; that is recorded, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StockRow {
    pub product_id: i64,
    pub department_id: i64,
    pub quantity: f64,
    pub updated_at: i64,
}

/// Stock row joined with product and department names, for listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StockView {
    pub product_id: i64,
    pub product_name: String,
    pub unit: String,
    pub department_id: i64,
    pub department_name: String,
    pub quantity: f64,
    pub updated_at: i64,
}

/// Kind of stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum MovementKind {
    /// Goods receipt (NIR)
    Receipt,
    /// Transfer into a department
    TransferIn,
    /// Transfer out of a department
    TransferOut,
    /// Return to supplier
    Retur,
    /// Sale consumption (direct or via recipe)
    Consumption,
}

/// One entry of the append-only movement journal.
///
/// `stock.quantity` is the materialized running sum of these deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StockMovement {
    pub id: i64,
    pub product_id: i64,
    pub department_id: i64,
    pub delta: f64,
    pub kind: MovementKind,
    /// ID of the document that caused the movement (NIR, transfer, retur, order)
    pub ref_id: i64,
    pub created_at: i64,
}
