//! Order Repository

use super::{product, recipe, RepoError, RepoResult};
use crate::stock;
use shared::error::ErrorCode;
use shared::models::{
    MovementKind, Order, OrderCreate, OrderFull, OrderItem, OrderItemInput, OrderItemView,
    OrderStatus,
};
use sqlx::SqlitePool;

const ORDER_SELECT: &str = "SELECT id, table_label, status, pay_method, user_id, created_at, closed_at FROM customer_order";

pub async fn find_all(pool: &SqlitePool, status: Option<OrderStatus>) -> RepoResult<Vec<Order>> {
    let rows = match status {
        Some(status) => {
            let sql = format!("{} WHERE status = ? ORDER BY created_at DESC", ORDER_SELECT);
            sqlx::query_as::<_, Order>(&sql)
                .bind(status)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!("{} ORDER BY created_at DESC", ORDER_SELECT);
            sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderFull>> {
    let sql = format!("{} WHERE id = ?", ORDER_SELECT);
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(order) = order else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, OrderItemView>(
        "SELECT oi.id, oi.order_id, oi.product_id, p.name AS product_name, oi.quantity, oi.price FROM order_item oi JOIN product p ON p.id = oi.product_id WHERE oi.order_id = ?",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(OrderFull { order, items }))
}

pub async fn create(pool: &SqlitePool, data: OrderCreate) -> RepoResult<OrderFull> {
    if data.table_label.trim().is_empty() {
        return Err(RepoError::Validation("table_label is required".into()));
    }
    for item in &data.items {
        if item.quantity <= 0.0 {
            return Err(RepoError::Validation("quantity must be positive".into()));
        }
    }

    let order_id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO customer_order (id, table_label, status, user_id, created_at) VALUES (?1, ?2, 'open', ?3, ?4)",
    )
    .bind(order_id)
    .bind(&data.table_label)
    .bind(data.user_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    insert_items(&mut tx, order_id, &data.items).await?;

    tx.commit().await?;

    find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

/// Append line items to an open order.
pub async fn add_items(
    pool: &SqlitePool,
    order_id: i64,
    items: &[OrderItemInput],
) -> RepoResult<OrderFull> {
    if items.is_empty() {
        return Err(RepoError::Validation("no items to add".into()));
    }
    for item in items {
        if item.quantity <= 0.0 {
            return Err(RepoError::Validation("quantity must be positive".into()));
        }
    }

    let order = require_order(pool, order_id).await?;
    if order.status == OrderStatus::Closed {
        return Err(RepoError::Business(
            ErrorCode::OrderAlreadyClosed,
            format!("Order {order_id} is closed"),
        ));
    }

    let mut tx = pool.begin().await?;
    insert_items(&mut tx, order_id, items).await?;
    tx.commit().await?;

    find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {order_id} not found")))
}

/// Mark an open order as delivered to the table.
pub async fn deliver(pool: &SqlitePool, order_id: i64) -> RepoResult<OrderFull> {
    let order = require_order(pool, order_id).await?;
    if order.status == OrderStatus::Closed {
        return Err(RepoError::Business(
            ErrorCode::OrderAlreadyClosed,
            format!("Order {order_id} is closed"),
        ));
    }

    sqlx::query("UPDATE customer_order SET status = 'delivered' WHERE id = ?")
        .bind(order_id)
        .execute(pool)
        .await?;

    find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {order_id} not found")))
}

/// Close an order with a payment method and consume stock.
///
/// Line items of recipe products decrement each ingredient by
/// (recipe quantity × line quantity) at the ingredient's home department;
/// recipe-less products decrement their own stock at their home department.
/// Status change and every decrement commit in one transaction.
pub async fn close(pool: &SqlitePool, order_id: i64, pay_method: &str) -> RepoResult<OrderFull> {
    if pay_method.trim().is_empty() {
        return Err(RepoError::Validation("pay_method is required".into()));
    }

    let order = require_order(pool, order_id).await?;
    if order.status == OrderStatus::Closed {
        return Err(RepoError::Business(
            ErrorCode::OrderAlreadyClosed,
            format!("Order {order_id} is closed"),
        ));
    }

    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, product_id, quantity, price FROM order_item WHERE order_id = ?",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;

    if items.is_empty() {
        return Err(RepoError::Business(
            ErrorCode::OrderEmpty,
            format!("Order {order_id} has no items"),
        ));
    }

    // One fetch for the whole order: recipes for the distinct product set,
    // then home departments for the recipe-less rest.
    let mut product_ids: Vec<i64> = items.iter().map(|i| i.product_id).collect();
    product_ids.sort_unstable();
    product_ids.dedup();

    let recipes = recipe::fetch_for_products(pool, &product_ids).await?;
    let direct: Vec<i64> = product_ids
        .iter()
        .copied()
        .filter(|id| !recipes.contains_key(id))
        .collect();
    let homes = product::home_departments(pool, &direct).await?;

    let plan = stock::plan_consumption(&items, &recipes, &homes)?;

    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    sqlx::query(
        "UPDATE customer_order SET status = 'closed', pay_method = ?1, closed_at = ?2 WHERE id = ?3",
    )
    .bind(pay_method)
    .bind(now)
    .bind(order_id)
    .execute(&mut *tx)
    .await?;

    for entry in &plan {
        stock::adjust(
            &mut tx,
            entry.product_id,
            entry.department_id,
            -entry.quantity,
            MovementKind::Consumption,
            order_id,
        )
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        order_id,
        pay_method,
        lines = items.len(),
        decrements = plan.len(),
        "Order closed"
    );

    find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {order_id} not found")))
}

async fn require_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Order> {
    let sql = format!("{} WHERE id = ?", ORDER_SELECT);
    sqlx::query_as::<_, Order>(&sql)
        .bind(order_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| {
            RepoError::Business(
                ErrorCode::OrderNotFound,
                format!("Order {order_id} not found"),
            )
        })
}

/// Insert line items, capturing each product's current price.
///
/// Reads and writes go through the caller's transaction.
async fn insert_items(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    order_id: i64,
    items: &[OrderItemInput],
) -> RepoResult<()> {
    for item in items {
        let price = sqlx::query_scalar::<_, f64>("SELECT price FROM product WHERE id = ?")
            .bind(item.product_id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or_else(|| {
                RepoError::NotFound(format!("Product {} not found", item.product_id))
            })?;

        sqlx::query(
            "INSERT INTO order_item (id, order_id, product_id, quantity, price) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(shared::util::snowflake_id())
        .bind(order_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(price)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
