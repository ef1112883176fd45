//! Stock Repository (read side)
//!
//! Writes go through the stock engine (`crate::stock`); this module only
//! queries the ledger and the movement journal.

use super::RepoResult;
use shared::models::{StockMovement, StockRow, StockView};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool, department_id: Option<i64>) -> RepoResult<Vec<StockView>> {
    const SELECT: &str = "SELECT s.product_id, p.name AS product_name, p.unit, s.department_id, d.name AS department_name, s.quantity, s.updated_at FROM stock s JOIN product p ON p.id = s.product_id JOIN department d ON d.id = s.department_id";

    let rows = match department_id {
        Some(dep) => {
            let sql = format!("{SELECT} WHERE s.department_id = ? ORDER BY p.name");
            sqlx::query_as::<_, StockView>(&sql)
                .bind(dep)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!("{SELECT} ORDER BY d.name, p.name");
            sqlx::query_as::<_, StockView>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

/// Ledger rows for one department, as snapshotted by inventory counts.
pub async fn rows_for_snapshot(
    pool: &SqlitePool,
    department_id: Option<i64>,
) -> RepoResult<Vec<StockRow>> {
    const SELECT: &str = "SELECT product_id, department_id, quantity, updated_at FROM stock";

    let rows = match department_id {
        Some(dep) => {
            let sql = format!("{SELECT} WHERE department_id = ?");
            sqlx::query_as::<_, StockRow>(&sql)
                .bind(dep)
                .fetch_all(pool)
                .await?
        }
        None => sqlx::query_as::<_, StockRow>(SELECT).fetch_all(pool).await?,
    };
    Ok(rows)
}

/// Current quantity for one (product, department) pair, if a row exists.
pub async fn quantity(
    pool: &SqlitePool,
    product_id: i64,
    department_id: i64,
) -> RepoResult<Option<f64>> {
    let qty = sqlx::query_scalar::<_, f64>(
        "SELECT quantity FROM stock WHERE product_id = ? AND department_id = ?",
    )
    .bind(product_id)
    .bind(department_id)
    .fetch_optional(pool)
    .await?;
    Ok(qty)
}

pub async fn find_movements(
    pool: &SqlitePool,
    product_id: Option<i64>,
    department_id: Option<i64>,
    limit: i64,
) -> RepoResult<Vec<StockMovement>> {
    let mut sql = String::from(
        "SELECT id, product_id, department_id, delta, kind, ref_id, created_at FROM stock_movement WHERE 1 = 1",
    );
    if product_id.is_some() {
        sql.push_str(" AND product_id = ?");
    }
    if department_id.is_some() {
        sql.push_str(" AND department_id = ?");
    }
    sql.push_str(" ORDER BY created_at DESC, id DESC LIMIT ?");

    let mut query = sqlx::query_as::<_, StockMovement>(&sql);
    if let Some(p) = product_id {
        query = query.bind(p);
    }
    if let Some(d) = department_id {
        query = query.bind(d);
    }
    query = query.bind(limit);

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}
