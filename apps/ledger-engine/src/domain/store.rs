//! Ledger store port and unit of work.
//!
//! The three entity tables (locations, stock records, transfer history)
//! live behind a single injected store handle. Every operation, reads
//! included, runs against a [`LedgerTx`], an explicit unit of work holding
//! a staged snapshot of the tables. Mutations become visible only when
//! the transaction commits, so a multi-step transfer either lands whole
//! or not at all.
//!
//! Commit is optimistic: a transaction that began before a concurrent
//! commit fails with [`StoreError::Conflict`] and can be retried by the
//! caller. No partial effect is ever observable.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::location::Location;
use crate::domain::shared::{LocationId, Quantity, SkuCode, Timestamp};
use crate::domain::stock::{StockError, StockRecord};
use crate::domain::transfer::TransferRecord;

/// Errors from the store itself, distinct from the domain taxonomy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another transaction committed between `begin` and `commit`.
    #[error("transaction based on version {base} conflicts with committed version {committed}")]
    Conflict {
        /// Version the transaction was begun against.
        base: u64,
        /// Version currently committed.
        committed: u64,
    },
}

/// Snapshot of the three entity tables.
///
/// Stock records are keyed `(location, sku)` in a `BTreeMap`, so
/// iterating one location's records yields them in SKU order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    pub(crate) locations: BTreeMap<LocationId, Location>,
    pub(crate) stock: BTreeMap<(LocationId, SkuCode), StockRecord>,
    pub(crate) transfers: Vec<TransferRecord>,
    pub(crate) transfer_seq: u64,
}

/// An explicit unit of work over the ledger tables.
///
/// All reads and writes inside a transaction see the staged state; the
/// store applies the whole transaction atomically on commit. Dropping a
/// transaction without committing discards it.
#[derive(Debug)]
pub struct LedgerTx {
    tables: Tables,
    base_version: u64,
}

impl LedgerTx {
    pub(crate) const fn new(tables: Tables, base_version: u64) -> Self {
        Self {
            tables,
            base_version,
        }
    }

    pub(crate) fn into_parts(self) -> (Tables, u64) {
        (self.tables, self.base_version)
    }

    /// Look up a location regardless of status.
    #[must_use]
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.tables.locations.get(id)
    }

    /// Look up a location, filtered to active ones.
    #[must_use]
    pub fn active_location(&self, id: &LocationId) -> Option<&Location> {
        self.tables.locations.get(id).filter(|loc| loc.is_active())
    }

    /// Stage a location write.
    pub fn put_location(&mut self, location: Location) {
        self.tables
            .locations
            .insert(location.id().clone(), location);
    }

    /// Look up the stock record for a SKU at a location.
    #[must_use]
    pub fn stock(&self, location_id: &LocationId, sku_code: &SkuCode) -> Option<&StockRecord> {
        self.tables
            .stock
            .get(&(location_id.clone(), sku_code.clone()))
    }

    /// Stage a stock record write.
    pub fn put_stock(&mut self, record: StockRecord) {
        let key = (record.location_id().clone(), record.sku_code().clone());
        self.tables.stock.insert(key, record);
    }

    /// Create-or-add inbound primitive: adds `amount` to the record for
    /// `(location, sku)`, creating it lazily with
    /// `quantity = original_quantity = amount`. Returns the new balance.
    ///
    /// A single primitive so there is no window between the existence
    /// check and the create inside one unit of work.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for non-positive amounts or if the
    /// addition would overflow.
    pub fn upsert_stock_delta(
        &mut self,
        location_id: &LocationId,
        sku_code: &SkuCode,
        amount: Quantity,
        now: Timestamp,
    ) -> Result<Quantity, StockError> {
        if !amount.is_positive() {
            return Err(StockError::InvalidAmount {
                amount: amount.units(),
            });
        }
        let key = (location_id.clone(), sku_code.clone());
        match self.tables.stock.get_mut(&key) {
            Some(record) => record.receive(amount, now),
            None => {
                let record =
                    StockRecord::open(sku_code.clone(), location_id.clone(), amount, now);
                let quantity = record.quantity();
                self.tables.stock.insert(key, record);
                Ok(quantity)
            }
        }
    }

    /// All positive-quantity records at a location, in SKU order.
    #[must_use]
    pub fn positive_stock_at(&self, location_id: &LocationId) -> Vec<StockRecord> {
        self.tables
            .stock
            .values()
            .filter(|rec| rec.location_id() == location_id && rec.quantity().is_positive())
            .cloned()
            .collect()
    }

    /// Number of positive-quantity records at a location.
    #[must_use]
    pub fn positive_record_count(&self, location_id: &LocationId) -> usize {
        self.tables
            .stock
            .values()
            .filter(|rec| rec.location_id() == location_id && rec.quantity().is_positive())
            .count()
    }

    /// Append a transfer record, assigning the next sequence id.
    pub fn append_transfer(
        &mut self,
        sku_code: SkuCode,
        source_location_id: LocationId,
        destination_location_id: LocationId,
        quantity: Quantity,
        now: Timestamp,
    ) -> TransferRecord {
        self.tables.transfer_seq += 1;
        let record = TransferRecord::new(
            self.tables.transfer_seq,
            sku_code,
            source_location_id,
            destination_location_id,
            quantity,
            now,
        );
        self.tables.transfers.push(record.clone());
        record
    }

    /// The transfer history visible to this transaction, oldest first.
    #[must_use]
    pub fn transfers(&self) -> &[TransferRecord] {
        &self.tables.transfers
    }
}

/// Port for the shared entity store.
///
/// Implemented by adapters (in-memory here; durable stores are external
/// collaborators behind the same interface). Each component holds a
/// reference to the same store handle.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Begin a transaction against the current committed state.
    async fn begin(&self) -> LedgerTx;

    /// Atomically apply a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if another transaction committed
    /// first; the caller's transaction is discarded and may be retried.
    async fn commit(&self, tx: LedgerTx) -> Result<(), StoreError>;
}
