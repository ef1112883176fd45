//! HTTP-level tests: drive the real router in-process with oneshot requests.

mod common;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{create_waiter, seed};
use pos_server::{build_router, Config, ServerState};

async fn test_app() -> (Router, sqlx::SqlitePool) {
    let config = Config::with_overrides("/tmp/pos-test", 0);
    let state = ServerState::initialize_in_memory(&config).await;
    let pool = state.db.clone();
    (build_router(state), pool)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _pool) = test_app().await;

    let (status, body) = send_json(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn login_matches_pin_exactly() {
    let (app, pool) = test_app().await;
    let user_id = create_waiter(&pool, "Ana", "4217").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "pin": "4217" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user_id);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["role"], "waiter");
}

#[tokio::test]
async fn login_with_unknown_pin_is_unauthorized() {
    let (app, pool) = test_app().await;
    create_waiter(&pool, "Ana", "4217").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "pin": "9999" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // Unified error envelope with a non-zero code
    assert_ne!(body["code"], 0);
}

#[tokio::test]
async fn product_crud_roundtrip() {
    let (app, pool) = test_app().await;
    let f = seed(&pool).await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Espresso",
            "price": 9.5,
            "unit": "buc",
            "department_id": f.bar,
            "category_id": f.category,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send_json(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Espresso");

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(json!({ "price": 10.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, "DELETE", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body["code"], 0);
}

#[tokio::test]
async fn stock_endpoint_reflects_receipts() {
    let (app, pool) = test_app().await;
    let f = seed(&pool).await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/nir",
        Some(json!({
            "supplier_id": f.supplier,
            "doc_number": "NIR-100",
            "items": [
                { "product_id": f.cola, "department_id": f.bar, "quantity": 24.0, "price": 3.1, "vat_rate": 19.0 }
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, rows) = send_json(
        &app,
        "GET",
        &format!("/api/stock?department_id={}", f.bar),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["product_name"], "COCA COLA");
    assert_eq!(rows[0]["quantity"], 24.0);
}

#[tokio::test]
async fn transfer_with_same_departments_returns_business_error() {
    let (app, pool) = test_app().await;
    let f = seed(&pool).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/transfers",
        Some(json!({
            "from_department_id": f.bar,
            "to_department_id": f.bar,
            "items": [{ "product_id": f.cola, "quantity": 1.0 }],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7001);
}

#[tokio::test]
async fn sales_report_aggregates_closed_orders() {
    let (app, pool) = test_app().await;
    let f = seed(&pool).await;

    let (_, order) = send_json(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_label": "M5",
            "items": [{ "product_id": f.cola, "quantity": 2.0 }],
        })),
    )
    .await;
    let order_id = order["id"].as_i64().unwrap();

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}/close"),
        Some(json!({ "pay_method": "cash" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, report) = send_json(&app, "GET", "/api/reports/sales", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["order_count"], 1);
    // 2 × 8.0 (COCA COLA price)
    assert_eq!(report["total_revenue"], 16.0);
    assert_eq!(report["top_products"][0]["product_id"], f.cola);
}
