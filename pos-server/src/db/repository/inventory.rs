//! Inventory Repository (physical count)

use super::{stock, RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{
    Inventory, InventoryCreate, InventoryFull, InventoryItem, InventoryUpdate,
};
use sqlx::SqlitePool;

const INVENTORY_SELECT: &str = "SELECT id, department_id, created_at FROM inventory";
const ITEM_SELECT: &str = "SELECT id, inventory_id, product_id, department_id, system_qty, actual_qty, difference FROM inventory_item";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Inventory>> {
    let sql = format!("{} ORDER BY created_at DESC", INVENTORY_SELECT);
    let rows = sqlx::query_as::<_, Inventory>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<InventoryFull>> {
    let sql = format!("{} WHERE id = ?", INVENTORY_SELECT);
    let inventory = sqlx::query_as::<_, Inventory>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(inventory) = inventory else {
        return Ok(None);
    };

    let sql = format!("{} WHERE inventory_id = ?", ITEM_SELECT);
    let items = sqlx::query_as::<_, InventoryItem>(&sql)
        .bind(id)
        .fetch_all(pool)
        .await?;

    Ok(Some(InventoryFull { inventory, items }))
}

/// Snapshot the current stock ledger into a new inventory count.
///
/// Every item starts with actual = system and difference 0; the physical
/// count comes in later via [`update`].
pub async fn create(pool: &SqlitePool, data: InventoryCreate) -> RepoResult<InventoryFull> {
    if let Some(dep) = data.department_id {
        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM department WHERE id = ?")
            .bind(dep)
            .fetch_one(pool)
            .await?;
        if found == 0 {
            return Err(RepoError::NotFound(format!("Department {dep} not found")));
        }
    }

    let rows = stock::rows_for_snapshot(pool, data.department_id).await?;

    let inventory_id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO inventory (id, department_id, created_at) VALUES (?1, ?2, ?3)")
        .bind(inventory_id)
        .bind(data.department_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO inventory_item (id, inventory_id, product_id, department_id, system_qty, actual_qty, difference) VALUES (?1, ?2, ?3, ?4, ?5, ?5, 0)",
        )
        .bind(shared::util::snowflake_id())
        .bind(inventory_id)
        .bind(row.product_id)
        .bind(row.department_id)
        .bind(row.quantity)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        inventory_id,
        department_id = ?data.department_id,
        items = rows.len(),
        "Inventory snapshot taken"
    );

    find_by_id(pool, inventory_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create inventory".into()))
}

/// Record corrected physical counts.
///
/// Recomputes difference = actual − system per item. The stock ledger is
/// deliberately left untouched: a count documents the discrepancy, it does
/// not correct the system of record.
pub async fn update(pool: &SqlitePool, id: i64, data: InventoryUpdate) -> RepoResult<InventoryFull> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inventory WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if exists == 0 {
        return Err(RepoError::Business(
            ErrorCode::InventoryNotFound,
            format!("Inventory {id} not found"),
        ));
    }

    let mut tx = pool.begin().await?;

    for correction in &data.items {
        let rows = sqlx::query(
            "UPDATE inventory_item SET actual_qty = ?1, difference = ?1 - system_qty WHERE id = ?2 AND inventory_id = ?3",
        )
        .bind(correction.actual_qty)
        .bind(correction.item_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "Inventory item {} not found",
                correction.item_id
            )));
        }
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Inventory {id} not found")))
}
