//! NIR Repository (goods receipt)

use super::{RepoError, RepoResult};
use crate::stock;
use shared::models::{MovementKind, Nir, NirCreate, NirFull, NirItem};
use sqlx::SqlitePool;

const NIR_SELECT: &str =
    "SELECT id, supplier_id, doc_number, value_net, value_vat, created_at FROM nir";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Nir>> {
    let sql = format!("{} ORDER BY created_at DESC", NIR_SELECT);
    let rows = sqlx::query_as::<_, Nir>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<NirFull>> {
    let sql = format!("{} WHERE id = ?", NIR_SELECT);
    let nir = sqlx::query_as::<_, Nir>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(nir) = nir else {
        return Ok(None);
    };

    let supplier_name =
        sqlx::query_scalar::<_, String>("SELECT name FROM supplier WHERE id = ?")
            .bind(nir.supplier_id)
            .fetch_optional(pool)
            .await?
            .unwrap_or_default();

    let items = sqlx::query_as::<_, NirItem>(
        "SELECT id, nir_id, product_id, department_id, quantity, price, vat_rate FROM nir_item WHERE nir_id = ?",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(NirFull {
        nir,
        supplier_name,
        items,
    }))
}

/// Create a goods receipt and increment stock at each item's department.
///
/// Deliberately not idempotent: resubmitting the same payload creates a
/// second NIR and applies the increments again. The document rows and every
/// ledger adjustment commit atomically.
pub async fn create(pool: &SqlitePool, data: NirCreate) -> RepoResult<NirFull> {
    if data.doc_number.trim().is_empty() {
        return Err(RepoError::Validation("doc_number is required".into()));
    }
    if data.items.is_empty() {
        return Err(RepoError::Validation(
            "a receipt needs at least one item".into(),
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

    let (value_net, value_vat) = shared::models::nir::document_totals(&data.items);

    let nir_id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO nir (id, supplier_id, doc_number, value_net, value_vat, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(nir_id)
    .bind(data.supplier_id)
    .bind(&data.doc_number)
    .bind(value_net)
    .bind(value_vat)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for item in &data.items {
        sqlx::query(
            "INSERT INTO nir_item (id, nir_id, product_id, department_id, quantity, price, vat_rate) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(shared::util::snowflake_id())
        .bind(nir_id)
        .bind(item.product_id)
        .bind(item.department_id)
        .bind(item.quantity)
        .bind(item.price)
        .bind(item.vat_rate)
        .execute(&mut *tx)
        .await?;

        stock::adjust(
            &mut tx,
            item.product_id,
            item.department_id,
            item.quantity,
            MovementKind::Receipt,
            nir_id,
        )
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        nir_id,
        supplier_id = data.supplier_id,
        doc_number = %data.doc_number,
        items = data.items.len(),
        value_net,
        "NIR received"
    );

    find_by_id(pool, nir_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create NIR".into()))
}
