//! Retur Repository (return to supplier)

use super::{product, RepoError, RepoResult};
use crate::stock;
use shared::models::{MovementKind, Retur, ReturCreate, ReturFull, ReturItem};
use sqlx::SqlitePool;

const RETUR_SELECT: &str = "SELECT id, supplier_id, reason, created_at FROM retur";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Retur>> {
    let sql = format!("{} ORDER BY created_at DESC", RETUR_SELECT);
    let rows = sqlx::query_as::<_, Retur>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ReturFull>> {
    let sql = format!("{} WHERE id = ?", RETUR_SELECT);
    let retur = sqlx::query_as::<_, Retur>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(retur) = retur else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, ReturItem>(
        "SELECT id, retur_id, product_id, quantity FROM retur_item WHERE retur_id = ?",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(ReturFull { retur, items }))
}

/// Create a supplier return and decrement stock.
///
/// Each item is booked out of the product's home department as recorded at
/// write time, not the department that originally received the goods.
pub async fn create(pool: &SqlitePool, data: ReturCreate) -> RepoResult<ReturFull> {
    if data.items.is_empty() {
        return Err(RepoError::Validation(
            "a return needs at least one item".into(),
        ));
    }
    for item in &data.items {
        if item.quantity <= 0.0 {
            return Err(RepoError::Validation("quantity must be positive".into()));
        }
    }

    let supplier = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM supplier WHERE id = ?")
        .bind(data.supplier_id)
        .fetch_one(pool)
        .await?;
    if supplier == 0 {
        return Err(RepoError::NotFound(format!(
            "Supplier {} not found",
            data.supplier_id
        )));
    }

    let product_ids: Vec<i64> = data.items.iter().map(|i| i.product_id).collect();
    let homes = product::home_departments(pool, &product_ids).await?;
    for id in &product_ids {
        if !homes.contains_key(id) {
            return Err(RepoError::NotFound(format!("Product {id} not found")));
        }
    }

    let retur_id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO retur (id, supplier_id, reason, created_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(retur_id)
        .bind(data.supplier_id)
        .bind(&data.reason)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    for item in &data.items {
        sqlx::query(
            "INSERT INTO retur_item (id, retur_id, product_id, quantity) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(shared::util::snowflake_id())
        .bind(retur_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .execute(&mut *tx)
        .await?;

        stock::adjust(
            &mut tx,
            item.product_id,
            homes[&item.product_id],
            -item.quantity,
            MovementKind::Retur,
            retur_id,
        )
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        retur_id,
        supplier_id = data.supplier_id,
        items = data.items.len(),
        "Return to supplier applied"
    );

    find_by_id(pool, retur_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create return".into()))
}
