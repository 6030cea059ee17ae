// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Ledger Engine - Warehouse Stock Core Library
//!
//! A warehouse inventory ledger: named storage locations, per-location
//! per-SKU stock counts, and a durable history of atomic transfers
//! between locations.
//!
//! # Architecture
//!
//! - **Domain**: the core components and their invariants
//!   - `location`: location lifecycle (`LocationRegistry`)
//!   - `stock`: quantity records and mutations (`StockLedger`)
//!   - `transfer`: atomic moves and history (`TransferEngine`, `TransferLog`)
//!   - `store`: the injected entity-store port with explicit units of work
//!
//! - **Infrastructure**: adapters
//!   - `persistence`: in-memory ledger store (optimistic, versioned)
//!   - `cli`: text command driver over the core
//!
//! # Guarantees
//!
//! Quantities never go negative; a transfer applies both legs and its
//! history record in one transaction or not at all; concurrent writers
//! serialize or abort with a retryable conflict, never partial state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Engine configuration from the environment.
pub mod config;

/// Domain layer - core components and invariants.
pub mod domain;

/// Infrastructure layer - store adapters and the command driver.
pub mod infrastructure;

pub use config::EngineConfig;
pub use domain::location::{Location, LocationRegistry, RegisterOutcome, RegistryError};
pub use domain::shared::{LocationId, Quantity, SkuCode, Timestamp};
pub use domain::stock::{
    DecrementReceipt, IncrementReceipt, StockError, StockLedger, StockLevel, StockRecord,
};
pub use domain::store::{LedgerStore, LedgerTx, StoreError};
pub use domain::transfer::{
    TransferEngine, TransferError, TransferFilter, TransferLog, TransferReceipt, TransferRecord,
};
pub use infrastructure::persistence::InMemoryLedgerStore;
