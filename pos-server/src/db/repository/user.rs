//! User Repository
//!
//! PIN lookup is a plain string equality; PINs are stored unhashed.

use super::{RepoError, RepoResult};
use shared::models::{User, UserCreate, UserUpdate};
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, name, pin, role, is_active, created_at FROM app_user";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let sql = format!("{} WHERE is_active = 1 ORDER BY name", USER_SELECT);
    let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{} WHERE id = ?", USER_SELECT);
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_pin(pool: &SqlitePool, pin: &str) -> RepoResult<Option<User>> {
    let sql = format!("{} WHERE pin = ? LIMIT 1", USER_SELECT);
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(pin)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM app_user")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    if data.pin.trim().is_empty() {
        return Err(RepoError::Validation("pin is required".into()));
    }

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM app_user WHERE pin = ?")
        .bind(&data.pin)
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Err(RepoError::Duplicate("PIN already in use".into()));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO app_user (id, name, pin, role, is_active, created_at) VALUES (?1, ?2, ?3, ?4, 1, ?5)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.pin)
    .bind(data.role)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: UserUpdate) -> RepoResult<User> {
    if let Some(pin) = &data.pin {
        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM app_user WHERE pin = ?1 AND id <> ?2",
        )
        .bind(pin)
        .bind(id)
        .fetch_one(pool)
        .await?;
        if taken > 0 {
            return Err(RepoError::Duplicate("PIN already in use".into()));
        }
    }

    let rows = sqlx::query(
        "UPDATE app_user SET name = COALESCE(?1, name), pin = COALESCE(?2, pin), role = COALESCE(?3, role), is_active = COALESCE(?4, is_active) WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.pin)
    .bind(data.role)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

/// Soft delete — closed orders keep referencing the user.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE app_user SET is_active = 0 WHERE id = ? AND is_active = 1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
