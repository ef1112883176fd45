//! Transfer Repository (inter-department move)

use super::{RepoError, RepoResult};
use crate::stock;
use shared::error::ErrorCode;
use shared::models::{MovementKind, Transfer, TransferCreate, TransferFull, TransferItem};
use sqlx::SqlitePool;

const TRANSFER_SELECT: &str =
    "SELECT id, from_department_id, to_department_id, note, created_at FROM transfer";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Transfer>> {
    let sql = format!("{} ORDER BY created_at DESC", TRANSFER_SELECT);
    let rows = sqlx::query_as::<_, Transfer>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<TransferFull>> {
    let sql = format!("{} WHERE id = ?", TRANSFER_SELECT);
    let transfer = sqlx::query_as::<_, Transfer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(transfer) = transfer else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, TransferItem>(
        "SELECT id, transfer_id, product_id, quantity FROM transfer_item WHERE transfer_id = ?",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(TransferFull { transfer, items }))
}

/// Create a transfer and move stock between the two departments.
///
/// Both sides of every item commit in one transaction — stock can never be
/// removed from the source without arriving at the destination.
pub async fn create(pool: &SqlitePool, data: TransferCreate) -> RepoResult<TransferFull> {
    if data.from_department_id == data.to_department_id {
        return Err(RepoError::Business(
            ErrorCode::TransferSameDepartment,
            "source and destination departments must differ".into(),
        ));
    }
    if data.items.is_empty() {
        return Err(RepoError::Validation(
            "a transfer needs at least one item".into(),
        ));
    }
    for item in &data.items {
        if item.quantity <= 0.0 {
            return Err(RepoError::Validation("quantity must be positive".into()));
        }
    }

    for dep in [data.from_department_id, data.to_department_id] {
        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM department WHERE id = ?")
            .bind(dep)
            .fetch_one(pool)
            .await?;
        if found == 0 {
            return Err(RepoError::NotFound(format!("Department {dep} not found")));
        }
    }

    let transfer_id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO transfer (id, from_department_id, to_department_id, note, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(transfer_id)
    .bind(data.from_department_id)
    .bind(data.to_department_id)
    .bind(&data.note)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for item in &data.items {
        sqlx::query(
            "INSERT INTO transfer_item (id, transfer_id, product_id, quantity) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(shared::util::snowflake_id())
        .bind(transfer_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .execute(&mut *tx)
        .await?;

        stock::adjust(
            &mut tx,
            item.product_id,
            data.from_department_id,
            -item.quantity,
            MovementKind::TransferOut,
            transfer_id,
        )
        .await?;
        stock::adjust(
            &mut tx,
            item.product_id,
            data.to_department_id,
            item.quantity,
            MovementKind::TransferIn,
            transfer_id,
        )
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        transfer_id,
        from = data.from_department_id,
        to = data.to_department_id,
        items = data.items.len(),
        "Transfer applied"
    );

    find_by_id(pool, transfer_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create transfer".into()))
}
