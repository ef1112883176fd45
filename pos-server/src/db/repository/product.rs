//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

const PRODUCT_SELECT: &str = "SELECT id, name, price, unit, department_id, category_id, is_active, created_at, updated_at FROM product";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let sql = format!("{} WHERE is_active = 1 ORDER BY name", PRODUCT_SELECT);
    let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_category(pool: &SqlitePool, category_id: i64) -> RepoResult<Vec<Product>> {
    let sql = format!(
        "{} WHERE category_id = ? AND is_active = 1 ORDER BY name",
        PRODUCT_SELECT
    );
    let rows = sqlx::query_as::<_, Product>(&sql)
        .bind(category_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("{} WHERE id = ?", PRODUCT_SELECT);
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("name is required".into()));
    }
    if data.price < 0.0 {
        return Err(RepoError::Validation("price cannot be negative".into()));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let unit = data.unit.unwrap_or_else(|| "buc".to_string());
    sqlx::query(
        "INSERT INTO product (id, name, price, unit, department_id, category_id, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.price)
    .bind(&unit)
    .bind(data.department_id)
    .bind(data.category_id)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<Product> {
    if let Some(price) = data.price {
        if price < 0.0 {
            return Err(RepoError::Validation("price cannot be negative".into()));
        }
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product SET name = COALESCE(?1, name), price = COALESCE(?2, price), unit = COALESCE(?3, unit), department_id = COALESCE(?4, department_id), category_id = COALESCE(?5, category_id), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.unit)
    .bind(data.department_id)
    .bind(data.category_id)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Hard delete — stock rows and movements cascade with the product.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM product WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Home departments for a set of products, fetched in one query.
pub async fn home_departments(
    pool: &SqlitePool,
    product_ids: &[i64],
) -> RepoResult<std::collections::HashMap<i64, i64>> {
    if product_ids.is_empty() {
        return Ok(Default::default());
    }

    // Dynamic query: variable number of IN placeholders — keep as runtime query
    let placeholders = product_ids
        .iter()
        .map(|_| "?")
        .collect::<Vec<_>>()
        .join(",");
    let sql = format!("SELECT id, department_id FROM product WHERE id IN ({placeholders})");
    let mut query = sqlx::query_as::<_, (i64, i64)>(&sql);
    for id in product_ids {
        query = query.bind(id);
    }
    let rows = query.fetch_all(pool).await?;

    Ok(rows.into_iter().collect())
}
