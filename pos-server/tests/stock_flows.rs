//! Stock flow scenarios: receipt, transfer, return, order close and
//! inventory counts, each checked against the ledger and the journal.

mod common;

use common::{create_product, seed, test_pool};
use pos_server::db::repository::{inventory, nir, order, recipe, retur, stock, transfer};
use shared::error::ErrorCode;
use shared::models::{
    InventoryCreate, InventoryItemCorrection, InventoryUpdate, MovementKind, NirCreate,
    NirItemInput, OrderCreate, OrderItemInput, RecipeCreate, RecipeItemInput, ReturCreate,
    ReturItemInput, TransferCreate, TransferItemInput,
};

const EPS: f64 = 1e-9;

fn nir_item(product_id: i64, department_id: i64, quantity: f64) -> NirItemInput {
    NirItemInput {
        product_id,
        department_id,
        quantity,
        price: 2.5,
        vat_rate: 9.0,
    }
}

async fn receive(
    pool: &sqlx::SqlitePool,
    supplier: i64,
    doc: &str,
    items: Vec<NirItemInput>,
) -> i64 {
    nir::create(
        pool,
        NirCreate {
            supplier_id: supplier,
            doc_number: doc.into(),
            items,
        },
    )
    .await
    .unwrap()
    .nir
    .id
}

// ========================================================================
// Receipt
// ========================================================================

#[tokio::test]
async fn receipt_increments_stock_at_each_items_department() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(
        &pool,
        f.supplier,
        "NIR-001",
        vec![
            nir_item(f.faina, f.bucatarie, 50.0),
            nir_item(f.cola, f.bar, 100.0),
        ],
    )
    .await;

    let faina = stock::quantity(&pool, f.faina, f.bucatarie).await.unwrap();
    let cola = stock::quantity(&pool, f.cola, f.bar).await.unwrap();
    assert!((faina.unwrap() - 50.0).abs() < EPS);
    assert!((cola.unwrap() - 100.0).abs() < EPS);
}

#[tokio::test]
async fn receipt_is_not_idempotent_resubmission_double_applies() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    let items = vec![nir_item(f.faina, f.bucatarie, 10.0)];
    receive(&pool, f.supplier, "NIR-002", items.clone()).await;
    receive(&pool, f.supplier, "NIR-002", items).await;

    // Two documents, twice the stock
    let nirs = nir::find_all(&pool).await.unwrap();
    assert_eq!(nirs.len(), 2);
    let qty = stock::quantity(&pool, f.faina, f.bucatarie)
        .await
        .unwrap()
        .unwrap();
    assert!((qty - 20.0).abs() < EPS);
}

#[tokio::test]
async fn receipt_computes_document_totals() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    let full = nir::create(
        &pool,
        NirCreate {
            supplier_id: f.supplier,
            doc_number: "NIR-003".into(),
            items: vec![NirItemInput {
                product_id: f.faina,
                department_id: f.bucatarie,
                quantity: 10.0,
                price: 3.333,
                vat_rate: 19.0,
            }],
        },
    )
    .await
    .unwrap();

    assert!((full.nir.value_net - 33.33).abs() < EPS);
    assert!((full.nir.value_vat - 6.33).abs() < EPS);
}

#[tokio::test]
async fn receipt_rejects_empty_and_nonpositive_items() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    let empty = nir::create(
        &pool,
        NirCreate {
            supplier_id: f.supplier,
            doc_number: "NIR-004".into(),
            items: vec![],
        },
    )
    .await;
    assert!(empty.is_err());

    let negative = nir::create(
        &pool,
        NirCreate {
            supplier_id: f.supplier,
            doc_number: "NIR-005".into(),
            items: vec![nir_item(f.faina, f.bucatarie, -1.0)],
        },
    )
    .await;
    assert!(negative.is_err());
}

#[tokio::test]
async fn failing_item_rolls_back_the_whole_receipt() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    // Second line references a product that doesn't exist; the foreign key
    // fails mid-loop and the transaction unwinds everything.
    let result = nir::create(
        &pool,
        NirCreate {
            supplier_id: f.supplier,
            doc_number: "NIR-006".into(),
            items: vec![
                nir_item(f.faina, f.bucatarie, 5.0),
                nir_item(999_999, f.bucatarie, 1.0),
            ],
        },
    )
    .await;
    assert!(result.is_err());

    assert!(nir::find_all(&pool).await.unwrap().is_empty());
    assert!(stock::quantity(&pool, f.faina, f.bucatarie)
        .await
        .unwrap()
        .is_none());
}

// ========================================================================
// Transfer
// ========================================================================

#[tokio::test]
async fn transfer_moves_quantity_and_keeps_total_unchanged() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(&pool, f.supplier, "NIR-010", vec![nir_item(f.cola, f.bar, 100.0)]).await;

    transfer::create(
        &pool,
        TransferCreate {
            from_department_id: f.bar,
            to_department_id: f.bufet,
            note: None,
            items: vec![TransferItemInput {
                product_id: f.cola,
                quantity: 10.0,
            }],
        },
    )
    .await
    .unwrap();

    let bar = stock::quantity(&pool, f.cola, f.bar).await.unwrap().unwrap();
    let bufet = stock::quantity(&pool, f.cola, f.bufet)
        .await
        .unwrap()
        .unwrap();
    assert!((bar - 90.0).abs() < EPS);
    assert!((bufet - 10.0).abs() < EPS);
    assert!((bar + bufet - 100.0).abs() < EPS);
}

#[tokio::test]
async fn transfer_rejects_identical_departments() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    let result = transfer::create(
        &pool,
        TransferCreate {
            from_department_id: f.bar,
            to_department_id: f.bar,
            note: None,
            items: vec![TransferItemInput {
                product_id: f.cola,
                quantity: 1.0,
            }],
        },
    )
    .await;

    match result {
        Err(pos_server::db::repository::RepoError::Business(code, _)) => {
            assert_eq!(code, ErrorCode::TransferSameDepartment)
        }
        other => panic!("expected business error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn transfer_records_both_journal_sides() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(&pool, f.supplier, "NIR-011", vec![nir_item(f.cola, f.bar, 20.0)]).await;

    let t = transfer::create(
        &pool,
        TransferCreate {
            from_department_id: f.bar,
            to_department_id: f.bufet,
            note: Some("restock buffet".into()),
            items: vec![TransferItemInput {
                product_id: f.cola,
                quantity: 5.0,
            }],
        },
    )
    .await
    .unwrap();

    let movements = stock::find_movements(&pool, Some(f.cola), None, 100)
        .await
        .unwrap();
    let out = movements
        .iter()
        .find(|m| m.kind == MovementKind::TransferOut)
        .expect("transfer_out movement");
    let inn = movements
        .iter()
        .find(|m| m.kind == MovementKind::TransferIn)
        .expect("transfer_in movement");

    assert_eq!(out.ref_id, t.transfer.id);
    assert_eq!(out.department_id, f.bar);
    assert!((out.delta + 5.0).abs() < EPS);
    assert_eq!(inn.department_id, f.bufet);
    assert!((inn.delta - 5.0).abs() < EPS);
}

// ========================================================================
// Return to supplier
// ========================================================================

#[tokio::test]
async fn retur_decrements_home_department_stock() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(&pool, f.supplier, "NIR-020", vec![nir_item(f.cola, f.bar, 30.0)]).await;

    retur::create(
        &pool,
        ReturCreate {
            supplier_id: f.supplier,
            reason: Some("expired".into()),
            items: vec![ReturItemInput {
                product_id: f.cola,
                quantity: 4.0,
            }],
        },
    )
    .await
    .unwrap();

    // COCA COLA's home department is BAR
    let qty = stock::quantity(&pool, f.cola, f.bar).await.unwrap().unwrap();
    assert!((qty - 26.0).abs() < EPS);
}

// ========================================================================
// Order close
// ========================================================================

async fn open_order_with(
    pool: &sqlx::SqlitePool,
    product_id: i64,
    quantity: f64,
) -> i64 {
    order::create(
        pool,
        OrderCreate {
            table_label: "M1".into(),
            user_id: None,
            items: vec![OrderItemInput {
                product_id,
                quantity,
            }],
        },
    )
    .await
    .unwrap()
    .order
    .id
}

#[tokio::test]
async fn closing_recipe_product_consumes_ingredients_only() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    // Stock(FAINA, BUCATARIE) = 50; PIZZA uses 0.3 kg per unit
    receive(&pool, f.supplier, "NIR-030", vec![nir_item(f.faina, f.bucatarie, 50.0)]).await;
    recipe::create_or_replace(
        &pool,
        RecipeCreate {
            product_id: f.pizza,
            items: vec![RecipeItemInput {
                ingredient_id: f.faina,
                quantity: 0.3,
            }],
        },
    )
    .await
    .unwrap();

    let order_id = open_order_with(&pool, f.pizza, 2.0).await;
    let closed = order::close(&pool, order_id, "cash").await.unwrap();

    assert!(closed.order.closed_at.is_some());
    assert_eq!(closed.order.pay_method.as_deref(), Some("cash"));

    let faina = stock::quantity(&pool, f.faina, f.bucatarie)
        .await
        .unwrap()
        .unwrap();
    assert!((faina - 49.4).abs() < EPS);

    // The pizza's own stock is untouched (no ledger row was ever created)
    let pizza = stock::quantity(&pool, f.pizza, f.bucatarie).await.unwrap();
    assert!(pizza.is_none());
}

#[tokio::test]
async fn closing_plain_product_consumes_its_own_stock() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(&pool, f.supplier, "NIR-031", vec![nir_item(f.cola, f.bar, 12.0)]).await;

    let order_id = open_order_with(&pool, f.cola, 3.0).await;
    order::close(&pool, order_id, "card").await.unwrap();

    let qty = stock::quantity(&pool, f.cola, f.bar).await.unwrap().unwrap();
    assert!((qty - 9.0).abs() < EPS);
}

#[tokio::test]
async fn closing_empty_recipe_product_consumes_nothing() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    // A combo product whose recipe has zero lines: non-stock-tracked
    let combo = create_product(&pool, "MENIU ZILEI", 25.0, "buc", f.bucatarie, f.category).await;
    recipe::create_or_replace(
        &pool,
        RecipeCreate {
            product_id: combo,
            items: vec![],
        },
    )
    .await
    .unwrap();

    let order_id = open_order_with(&pool, combo, 2.0).await;
    order::close(&pool, order_id, "cash").await.unwrap();

    assert!(stock::quantity(&pool, combo, f.bucatarie)
        .await
        .unwrap()
        .is_none());
    let movements = stock::find_movements(&pool, Some(combo), None, 10)
        .await
        .unwrap();
    assert!(movements.is_empty());
}

#[tokio::test]
async fn closing_twice_is_rejected() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(&pool, f.supplier, "NIR-032", vec![nir_item(f.cola, f.bar, 10.0)]).await;
    let order_id = open_order_with(&pool, f.cola, 1.0).await;

    order::close(&pool, order_id, "cash").await.unwrap();
    let second = order::close(&pool, order_id, "cash").await;

    match second {
        Err(pos_server::db::repository::RepoError::Business(code, _)) => {
            assert_eq!(code, ErrorCode::OrderAlreadyClosed)
        }
        other => panic!("expected business error, got {:?}", other.map(|_| ())),
    }

    // Stock consumed exactly once
    let qty = stock::quantity(&pool, f.cola, f.bar).await.unwrap().unwrap();
    assert!((qty - 9.0).abs() < EPS);
}

#[tokio::test]
async fn consumption_may_drive_stock_negative() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    // No receipt at all: selling still books the consumption
    let order_id = open_order_with(&pool, f.cola, 2.0).await;
    order::close(&pool, order_id, "cash").await.unwrap();

    let qty = stock::quantity(&pool, f.cola, f.bar).await.unwrap().unwrap();
    assert!((qty + 2.0).abs() < EPS);
}

#[tokio::test]
async fn delivered_orders_can_still_be_closed() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(&pool, f.supplier, "NIR-033", vec![nir_item(f.cola, f.bar, 10.0)]).await;
    let order_id = open_order_with(&pool, f.cola, 1.0).await;

    order::deliver(&pool, order_id).await.unwrap();
    let closed = order::close(&pool, order_id, "cash").await.unwrap();
    assert_eq!(closed.order.status, shared::models::OrderStatus::Closed);
}

// ========================================================================
// Inventory count
// ========================================================================

#[tokio::test]
async fn inventory_correction_never_touches_the_ledger() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(&pool, f.supplier, "NIR-040", vec![nir_item(f.faina, f.bucatarie, 30.0)]).await;

    let snapshot = inventory::create(
        &pool,
        InventoryCreate {
            department_id: Some(f.bucatarie),
        },
    )
    .await
    .unwrap();
    assert_eq!(snapshot.items.len(), 1);
    let item = &snapshot.items[0];
    assert!((item.system_qty - 30.0).abs() < EPS);
    assert!((item.difference).abs() < EPS);

    // The shelf count found 27.5 kg
    let updated = inventory::update(
        &pool,
        snapshot.inventory.id,
        InventoryUpdate {
            items: vec![InventoryItemCorrection {
                item_id: item.id,
                actual_qty: 27.5,
            }],
        },
    )
    .await
    .unwrap();

    let corrected = &updated.items[0];
    assert!((corrected.actual_qty - 27.5).abs() < EPS);
    assert!((corrected.difference + 2.5).abs() < EPS);

    // The ledger still says 30
    let qty = stock::quantity(&pool, f.faina, f.bucatarie)
        .await
        .unwrap()
        .unwrap();
    assert!((qty - 30.0).abs() < EPS);
}

#[tokio::test]
async fn inventory_snapshot_respects_department_filter() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(
        &pool,
        f.supplier,
        "NIR-041",
        vec![
            nir_item(f.faina, f.bucatarie, 10.0),
            nir_item(f.cola, f.bar, 20.0),
        ],
    )
    .await;

    let bar_only = inventory::create(
        &pool,
        InventoryCreate {
            department_id: Some(f.bar),
        },
    )
    .await
    .unwrap();
    assert_eq!(bar_only.items.len(), 1);
    assert_eq!(bar_only.items[0].product_id, f.cola);

    let all = inventory::create(&pool, InventoryCreate { department_id: None })
        .await
        .unwrap();
    assert_eq!(all.items.len(), 2);
}

// ========================================================================
// Ledger invariant
// ========================================================================

#[tokio::test]
async fn quantity_equals_sum_of_journal_deltas() {
    let pool = test_pool().await;
    let f = seed(&pool).await;

    receive(&pool, f.supplier, "NIR-050", vec![nir_item(f.cola, f.bar, 40.0)]).await;
    transfer::create(
        &pool,
        TransferCreate {
            from_department_id: f.bar,
            to_department_id: f.bufet,
            note: None,
            items: vec![TransferItemInput {
                product_id: f.cola,
                quantity: 15.0,
            }],
        },
    )
    .await
    .unwrap();
    let order_id = open_order_with(&pool, f.cola, 2.0).await;
    order::close(&pool, order_id, "cash").await.unwrap();

    for dep in [f.bar, f.bufet] {
        let qty = stock::quantity(&pool, f.cola, dep).await.unwrap().unwrap();
        let movements = stock::find_movements(&pool, Some(f.cola), Some(dep), 1000)
            .await
            .unwrap();
        let sum: f64 = movements.iter().map(|m| m.delta).sum();
        assert!((qty - sum).abs() < EPS, "ledger drifted from journal");
    }
}
