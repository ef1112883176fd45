//! Recipe Repository

use std::collections::HashMap;

use super::{RepoError, RepoResult};
use shared::models::{Recipe, RecipeCreate, RecipeFull, RecipeLine};
use sqlx::SqlitePool;

const RECIPE_LINE_SELECT: &str = "SELECT r.product_id, ri.ingredient_id, p.name AS ingredient_name, p.department_id AS ingredient_department_id, ri.quantity FROM recipe r JOIN recipe_item ri ON ri.recipe_id = r.id JOIN product p ON p.id = ri.ingredient_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<RecipeFull>> {
    let recipes = sqlx::query_as::<_, (i64, i64, String, i64)>(
        "SELECT r.id, r.product_id, p.name, r.created_at FROM recipe r JOIN product p ON p.id = r.product_id ORDER BY p.name",
    )
    .fetch_all(pool)
    .await?;

    let mut lines_by_product: HashMap<i64, Vec<RecipeLine>> = HashMap::new();
    let all_lines = sqlx::query_as::<_, RecipeLine>(RECIPE_LINE_SELECT)
        .fetch_all(pool)
        .await?;
    for line in all_lines {
        lines_by_product
            .entry(line.product_id)
            .or_default()
            .push(line);
    }

    Ok(recipes
        .into_iter()
        .map(|(id, product_id, product_name, created_at)| RecipeFull {
            id,
            product_id,
            product_name,
            created_at,
            items: lines_by_product.remove(&product_id).unwrap_or_default(),
        })
        .collect())
}

pub async fn find_by_product(pool: &SqlitePool, product_id: i64) -> RepoResult<Option<RecipeFull>> {
    let header = sqlx::query_as::<_, (i64, i64, String, i64)>(
        "SELECT r.id, r.product_id, p.name, r.created_at FROM recipe r JOIN product p ON p.id = r.product_id WHERE r.product_id = ?",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;

    let Some((id, product_id, product_name, created_at)) = header else {
        return Ok(None);
    };

    let sql = format!("{} WHERE r.product_id = ?", RECIPE_LINE_SELECT);
    let items = sqlx::query_as::<_, RecipeLine>(&sql)
        .bind(product_id)
        .fetch_all(pool)
        .await?;

    Ok(Some(RecipeFull {
        id,
        product_id,
        product_name,
        created_at,
        items,
    }))
}

/// Create or replace the recipe of a product.
///
/// An empty item list is accepted: the product becomes non-stock-tracked
/// (closing an order leaves its stock alone).
pub async fn create_or_replace(pool: &SqlitePool, data: RecipeCreate) -> RepoResult<RecipeFull> {
    for item in &data.items {
        if item.quantity <= 0.0 {
            return Err(RepoError::Validation(
                "ingredient quantity must be positive".into(),
            ));
        }
        if item.ingredient_id == data.product_id {
            return Err(RepoError::Validation(
                "a product cannot be its own ingredient".into(),
            ));
        }
    }

    let product = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product WHERE id = ?")
        .bind(data.product_id)
        .fetch_one(pool)
        .await?;
    if product == 0 {
        return Err(RepoError::NotFound(format!(
            "Product {} not found",
            data.product_id
        )));
    }

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM recipe WHERE product_id = ?")
        .bind(data.product_id)
        .execute(&mut *tx)
        .await?;

    let recipe_id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query("INSERT INTO recipe (id, product_id, created_at) VALUES (?1, ?2, ?3)")
        .bind(recipe_id)
        .bind(data.product_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    for item in &data.items {
        sqlx::query(
            "INSERT INTO recipe_item (id, recipe_id, ingredient_id, quantity) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(shared::util::snowflake_id())
        .bind(recipe_id)
        .bind(item.ingredient_id)
        .bind(item.quantity)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    find_by_product(pool, data.product_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create recipe".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM recipe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn find_header_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Recipe>> {
    let row =
        sqlx::query_as::<_, Recipe>("SELECT id, product_id, created_at FROM recipe WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

/// Bulk-fetch the recipes of a product set, for order close.
///
/// Returns a map with an entry for every product that *has* a recipe —
/// including recipes with zero lines, which map to an empty vec. The stock
/// engine relies on that distinction (empty recipe = consume nothing).
pub async fn fetch_for_products(
    pool: &SqlitePool,
    product_ids: &[i64],
) -> RepoResult<HashMap<i64, Vec<RecipeLine>>> {
    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let placeholders = product_ids
        .iter()
        .map(|_| "?")
        .collect::<Vec<_>>()
        .join(",");

    let sql = format!("SELECT product_id FROM recipe WHERE product_id IN ({placeholders})");
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for id in product_ids {
        query = query.bind(id);
    }
    let recipe_products = query.fetch_all(pool).await?;

    let mut map: HashMap<i64, Vec<RecipeLine>> = recipe_products
        .into_iter()
        .map(|id| (id, Vec::new()))
        .collect();

    let sql = format!("{} WHERE r.product_id IN ({placeholders})", RECIPE_LINE_SELECT);
    let mut query = sqlx::query_as::<_, RecipeLine>(&sql);
    for id in product_ids {
        query = query.bind(id);
    }
    let lines = query.fetch_all(pool).await?;

    for line in lines {
        map.entry(line.product_id).or_default().push(line);
    }

    Ok(map)
}
