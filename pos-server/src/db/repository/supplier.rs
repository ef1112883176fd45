//! Supplier Repository

use super::{RepoError, RepoResult};
use shared::models::{Supplier, SupplierCreate, SupplierUpdate};
use sqlx::SqlitePool;

const SUPPLIER_SELECT: &str =
    "SELECT id, name, fiscal_code, address, is_active, created_at FROM supplier";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Supplier>> {
    let sql = format!("{} WHERE is_active = 1 ORDER BY name", SUPPLIER_SELECT);
    let rows = sqlx::query_as::<_, Supplier>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Supplier>> {
    let sql = format!("{} WHERE id = ?", SUPPLIER_SELECT);
    let row = sqlx::query_as::<_, Supplier>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: SupplierCreate) -> RepoResult<Supplier> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("name is required".into()));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO supplier (id, name, fiscal_code, address, is_active, created_at) VALUES (?1, ?2, ?3, ?4, 1, ?5)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.fiscal_code)
    .bind(&data.address)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create supplier".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: SupplierUpdate) -> RepoResult<Supplier> {
    let rows = sqlx::query(
        "UPDATE supplier SET name = COALESCE(?1, name), fiscal_code = COALESCE(?2, fiscal_code), address = COALESCE(?3, address), is_active = COALESCE(?4, is_active) WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.fiscal_code)
    .bind(&data.address)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Supplier {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Supplier {id} not found")))
}

/// Soft delete — documents keep referencing the supplier.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE supplier SET is_active = 0 WHERE id = ? AND is_active = 1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
