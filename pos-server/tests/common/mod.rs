//! Shared fixtures for integration tests

use pos_server::db::DbService;
use shared::models::{
    CategoryCreate, DepartmentCreate, ProductCreate, SupplierCreate, UserCreate, UserRole,
};
use sqlx::SqlitePool;

use pos_server::db::repository::{category, department, product, supplier, user};

pub async fn test_pool() -> SqlitePool {
    DbService::open_in_memory()
        .await
        .expect("in-memory database")
        .pool
}

/// A seeded store: three departments, one category, one supplier, and the
/// products the stock scenarios revolve around.
pub struct Fixtures {
    pub bucatarie: i64,
    pub bar: i64,
    pub bufet: i64,
    pub category: i64,
    pub supplier: i64,
    /// Raw ingredient, home department BUCATARIE
    pub faina: i64,
    /// Recipe product (0.3 kg FAINA per unit once the recipe is created)
    pub pizza: i64,
    /// Plain product, home department BAR
    pub cola: i64,
}

pub async fn seed(pool: &SqlitePool) -> Fixtures {
    let bucatarie = department::create(
        pool,
        DepartmentCreate {
            name: "BUCATARIE".into(),
        },
    )
    .await
    .unwrap()
    .id;
    let bar = department::create(pool, DepartmentCreate { name: "BAR".into() })
        .await
        .unwrap()
        .id;
    let bufet = department::create(
        pool,
        DepartmentCreate {
            name: "BUFET".into(),
        },
    )
    .await
    .unwrap()
    .id;

    let category = category::create(
        pool,
        CategoryCreate {
            name: "General".into(),
        },
    )
    .await
    .unwrap()
    .id;

    let supplier = supplier::create(
        pool,
        SupplierCreate {
            name: "Metro".into(),
            fiscal_code: Some("RO123456".into()),
            address: None,
        },
    )
    .await
    .unwrap()
    .id;

    let faina = create_product(pool, "FAINA", 4.5, "kg", bucatarie, category).await;
    let pizza = create_product(pool, "PIZZA MARGHERITA", 32.0, "buc", bucatarie, category).await;
    let cola = create_product(pool, "COCA COLA", 8.0, "buc", bar, category).await;

    Fixtures {
        bucatarie,
        bar,
        bufet,
        category,
        supplier,
        faina,
        pizza,
        cola,
    }
}

pub async fn create_product(
    pool: &SqlitePool,
    name: &str,
    price: f64,
    unit: &str,
    department_id: i64,
    category_id: i64,
) -> i64 {
    product::create(
        pool,
        ProductCreate {
            name: name.into(),
            price,
            unit: Some(unit.into()),
            department_id,
            category_id,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn create_waiter(pool: &SqlitePool, name: &str, pin: &str) -> i64 {
    user::create(
        pool,
        UserCreate {
            name: name.into(),
            pin: pin.into(),
            role: UserRole::Waiter,
        },
    )
    .await
    .unwrap()
    .id
}
