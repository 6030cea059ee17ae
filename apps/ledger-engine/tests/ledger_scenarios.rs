//! Ledger Scenario Integration Tests
//!
//! Exercises the full operation surface over the in-memory store:
//! registration lifecycle, stock mutations, observation, and transfers.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use ledger_engine::{
    InMemoryLedgerStore, LedgerStore, LocationId, LocationRegistry, Quantity, RegisterOutcome,
    RegistryError, SkuCode, StockError, StockLedger, TransferEngine, TransferError, TransferFilter,
    TransferLog,
};

struct Ledger {
    registry: LocationRegistry,
    stock: StockLedger,
    engine: TransferEngine,
    log: TransferLog,
}

fn ledger() -> Ledger {
    let store: Arc<dyn LedgerStore> = Arc::new(InMemoryLedgerStore::new());
    Ledger {
        registry: LocationRegistry::new(Arc::clone(&store)),
        stock: StockLedger::new(Arc::clone(&store)),
        engine: TransferEngine::new(Arc::clone(&store)),
        log: TransferLog::new(store),
    }
}

fn loc(id: &str) -> LocationId {
    LocationId::new(id)
}

fn sku(code: &str) -> SkuCode {
    SkuCode::new(code)
}

// Scenario A: duplicate registration.
#[tokio::test]
async fn register_then_duplicate_register() {
    let lg = ledger();

    let outcome = lg.registry.register(&loc("A1")).await.unwrap();
    assert_eq!(outcome, RegisterOutcome::Created);

    let err = lg.registry.register(&loc("A1")).await.unwrap_err();
    assert_eq!(
        err,
        RegistryError::AlreadyExists {
            location_id: "A1".to_string()
        }
    );
}

// Scenario B: over-decrement is rejected without side effect.
#[tokio::test]
async fn over_decrement_reports_available_vs_required() {
    let lg = ledger();
    lg.registry.register(&loc("A1")).await.unwrap();

    let receipt = lg
        .stock
        .increment(&loc("A1"), &sku("SKU1"), Quantity::new(10))
        .await
        .unwrap();
    assert_eq!(receipt.new_quantity, Quantity::new(10));

    let err = lg
        .stock
        .decrement(&loc("A1"), &sku("SKU1"), Quantity::new(15))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StockError::InsufficientQuantity {
            sku_code: "SKU1".to_string(),
            location_id: "A1".to_string(),
            available: 10,
            required: 15,
        }
    );

    let levels = lg.stock.observe(&loc("A1")).await.unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].quantity, Quantity::new(10));
}

// Scenario C: a successful transfer moves stock and logs one record.
#[tokio::test]
async fn transfer_moves_stock_and_logs() {
    let lg = ledger();
    lg.registry.register(&loc("A1")).await.unwrap();
    lg.registry.register(&loc("A2")).await.unwrap();
    lg.stock
        .increment(&loc("A1"), &sku("SKU1"), Quantity::new(10))
        .await
        .unwrap();

    let receipt = lg
        .engine
        .transfer(&loc("A1"), &loc("A2"), &sku("SKU1"), Quantity::new(6))
        .await
        .unwrap();
    assert_eq!(receipt.source_remaining, Quantity::new(4));
    assert_eq!(receipt.destination_quantity, Quantity::new(6));

    let history = lg.log.list(&TransferFilter::default()).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].sku_code(), &sku("SKU1"));
    assert_eq!(history[0].source_location_id(), &loc("A1"));
    assert_eq!(history[0].destination_location_id(), &loc("A2"));
    assert_eq!(history[0].quantity(), Quantity::new(6));
}

// Scenario D: self-transfer is rejected with no state change.
#[tokio::test]
async fn self_transfer_is_rejected() {
    let lg = ledger();
    lg.registry.register(&loc("A1")).await.unwrap();
    lg.stock
        .increment(&loc("A1"), &sku("SKU1"), Quantity::new(5))
        .await
        .unwrap();

    let err = lg
        .engine
        .transfer(&loc("A1"), &loc("A1"), &sku("SKU1"), Quantity::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, TransferError::SameLocation { .. }));

    let levels = lg.stock.observe(&loc("A1")).await.unwrap();
    assert_eq!(levels[0].quantity, Quantity::new(5));
    assert!(lg.log.list(&TransferFilter::default()).await.unwrap().is_empty());
}

// Scenario E: unregister is blocked by stock and unblocked at zero.
#[tokio::test]
async fn unregister_blocked_until_drained() {
    let lg = ledger();
    lg.registry.register(&loc("A1")).await.unwrap();
    lg.stock
        .increment(&loc("A1"), &sku("SKU1"), Quantity::new(4))
        .await
        .unwrap();

    let err = lg.registry.unregister(&loc("A1")).await.unwrap_err();
    assert_eq!(
        err,
        RegistryError::HasInventory {
            location_id: "A1".to_string(),
            records: 1,
        }
    );

    lg.stock
        .decrement(&loc("A1"), &sku("SKU1"), Quantity::new(4))
        .await
        .unwrap();
    lg.registry.unregister(&loc("A1")).await.unwrap();

    // Inactive locations reject all stock operations.
    let err = lg.stock.observe(&loc("A1")).await.unwrap_err();
    assert_eq!(
        err,
        StockError::LocationNotFound {
            location_id: "A1".to_string()
        }
    );
}

#[tokio::test]
async fn reactivated_location_keeps_its_history() {
    let lg = ledger();
    lg.registry.register(&loc("A1")).await.unwrap();
    lg.stock
        .increment(&loc("A1"), &sku("SKU1"), Quantity::new(4))
        .await
        .unwrap();
    lg.stock
        .decrement(&loc("A1"), &sku("SKU1"), Quantity::new(4))
        .await
        .unwrap();
    lg.registry.unregister(&loc("A1")).await.unwrap();

    let outcome = lg.registry.register(&loc("A1")).await.unwrap();
    assert_eq!(outcome, RegisterOutcome::Reactivated);

    // Same record, same lifetime total: a fresh increment adds to it.
    lg.stock
        .increment(&loc("A1"), &sku("SKU1"), Quantity::new(2))
        .await
        .unwrap();
    let levels = lg.stock.observe(&loc("A1")).await.unwrap();
    assert_eq!(levels[0].quantity, Quantity::new(2));
}

#[tokio::test]
async fn observe_lists_multiple_skus_in_order() {
    let lg = ledger();
    lg.registry.register(&loc("A1")).await.unwrap();
    for (code, amount) in [("SKU10", 1), ("SKU1", 2), ("SKU2", 3)] {
        lg.stock
            .increment(&loc("A1"), &sku(code), Quantity::new(amount))
            .await
            .unwrap();
    }

    let levels = lg.stock.observe(&loc("A1")).await.unwrap();
    let codes: Vec<&str> = levels.iter().map(|l| l.sku_code.as_str()).collect();
    // Lexicographic: "SKU10" sorts before "SKU2".
    assert_eq!(codes, vec!["SKU1", "SKU10", "SKU2"]);
}

#[tokio::test]
async fn transfer_history_is_append_only_and_ordered() {
    let lg = ledger();
    for id in ["A1", "A2"] {
        lg.registry.register(&loc(id)).await.unwrap();
    }
    lg.stock
        .increment(&loc("A1"), &sku("SKU1"), Quantity::new(10))
        .await
        .unwrap();

    lg.engine
        .transfer(&loc("A1"), &loc("A2"), &sku("SKU1"), Quantity::new(3))
        .await
        .unwrap();
    lg.engine
        .transfer(&loc("A2"), &loc("A1"), &sku("SKU1"), Quantity::new(1))
        .await
        .unwrap();

    let history = lg.log.list(&TransferFilter::default()).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].id() < history[1].id());
    assert!(history[0].created_at() <= history[1].created_at());
}
