//! Supplier Model

use serde::{Deserialize, Serialize};

/// Supplier entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    /// Fiscal identification code (CUI)
    pub fiscal_code: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create supplier payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierCreate {
    pub name: String,
    pub fiscal_code: Option<String>,
    pub address: Option<String>,
}

/// Update supplier payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub fiscal_code: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}
