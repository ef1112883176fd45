//! Report Repository

use super::RepoResult;
use shared::models::{ProductSales, SalesReport};
use sqlx::SqlitePool;

/// Number of products listed in the sales report
const TOP_PRODUCTS: i64 = 10;

/// Sales over closed orders in [from, to).
pub async fn sales(pool: &SqlitePool, from: i64, to: i64) -> RepoResult<SalesReport> {
    let (order_count, total_revenue) = sqlx::query_as::<_, (i64, f64)>(
        "SELECT COUNT(DISTINCT o.id), COALESCE(SUM(oi.quantity * oi.price), 0.0) FROM customer_order o JOIN order_item oi ON oi.order_id = o.id WHERE o.status = 'closed' AND o.closed_at >= ?1 AND o.closed_at < ?2",
    )
    .bind(from)
    .bind(to)
    .fetch_one(pool)
    .await?;

    let top_products = sqlx::query_as::<_, ProductSales>(
        "SELECT oi.product_id, p.name AS product_name, SUM(oi.quantity) AS quantity_sold, SUM(oi.quantity * oi.price) AS revenue FROM customer_order o JOIN order_item oi ON oi.order_id = o.id JOIN product p ON p.id = oi.product_id WHERE o.status = 'closed' AND o.closed_at >= ?1 AND o.closed_at < ?2 GROUP BY oi.product_id, p.name ORDER BY revenue DESC LIMIT ?3",
    )
    .bind(from)
    .bind(to)
    .bind(TOP_PRODUCTS)
    .fetch_all(pool)
    .await?;

    Ok(SalesReport {
        from,
        to,
        order_count,
        total_revenue,
        top_products,
    })
}
