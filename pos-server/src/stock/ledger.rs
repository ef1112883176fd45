//! Stock Ledger
//!
//! Upsert-by-key quantity store plus the append-only movement journal.

use crate::db::repository::RepoResult;
use shared::models::MovementKind;
use sqlx::SqliteConnection;

/// Apply a quantity delta to the (product, department) ledger row and record
/// the movement.
///
/// Creates the ledger row lazily on first touch. No floor is enforced:
/// quantity may go negative when consumption outruns recorded stock, and
/// that is recorded, not rejected.
///
/// Takes a connection rather than the pool so callers decide the transaction
/// boundary — a document's adjustments commit or roll back as one.
pub async fn adjust(
    conn: &mut SqliteConnection,
    product_id: i64,
    department_id: i64,
    delta: f64,
    kind: MovementKind,
    ref_id: i64,
) -> RepoResult<()> {
    let now = shared::util::now_millis();

    // INSERT OR IGNORE: only inserts if the (product, department) pair doesn't exist
    sqlx::query(
        "INSERT OR IGNORE INTO stock (product_id, department_id, quantity, updated_at) VALUES (?1, ?2, 0, ?3)",
    )
    .bind(product_id)
    .bind(department_id)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        "UPDATE stock SET quantity = quantity + ?1, updated_at = ?2 WHERE product_id = ?3 AND department_id = ?4",
    )
    .bind(delta)
    .bind(now)
    .bind(product_id)
    .bind(department_id)
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        "INSERT INTO stock_movement (id, product_id, department_id, delta, kind, ref_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(shared::util::snowflake_id())
    .bind(product_id)
    .bind(department_id)
    .bind(delta)
    .bind(kind)
    .bind(ref_id)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    tracing::debug!(
        product_id,
        department_id,
        delta,
        kind = ?kind,
        "Stock adjusted"
    );

    Ok(())
}
