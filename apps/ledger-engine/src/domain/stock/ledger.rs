//! Stock ledger service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::errors::StockError;
use crate::domain::shared::{LocationId, Quantity, SkuCode, Timestamp};
use crate::domain::store::{LedgerStore, LedgerTx};

/// Result of a successful increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementReceipt {
    /// SKU that was received.
    pub sku_code: SkuCode,
    /// Location that received it.
    pub location_id: LocationId,
    /// Balance after the increment.
    pub new_quantity: Quantity,
}

/// Result of a successful decrement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecrementReceipt {
    /// SKU that was issued.
    pub sku_code: SkuCode,
    /// Location it was issued from.
    pub location_id: LocationId,
    /// Balance before the decrement.
    pub previous_quantity: Quantity,
    /// Balance after the decrement.
    pub new_quantity: Quantity,
}

/// One line of an observation: a SKU and its positive balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// SKU code.
    pub sku_code: SkuCode,
    /// Current balance, strictly positive.
    pub quantity: Quantity,
}

/// Owns per-(location, SKU) quantity records.
///
/// Enforces non-negativity and the location-active rule on every
/// mutating write. Amounts are hardened: non-positive increments and
/// decrements are rejected with `InvalidAmount` before any state is
/// touched.
pub struct StockLedger {
    store: Arc<dyn LedgerStore>,
}

impl StockLedger {
    /// Create a ledger over the shared store handle.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Add `amount` units of `sku_code` at `location_id`, creating the
    /// record lazily on first receipt. Returns the new balance.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for non-positive amounts, `LocationNotFound` if
    /// the location is missing or inactive, `Conflict` on a lost commit
    /// race.
    pub async fn increment(
        &self,
        location_id: &LocationId,
        sku_code: &SkuCode,
        amount: Quantity,
    ) -> Result<IncrementReceipt, StockError> {
        require_positive(amount)?;
        let mut tx = self.store.begin().await;
        require_active(&tx, location_id)?;

        let new_quantity = Self::adjust_for_transfer_in(&mut tx, location_id, sku_code, amount)?;
        self.store.commit(tx).await?;

        info!(
            location_id = %location_id,
            sku_code = %sku_code,
            amount = amount.units(),
            new_quantity = new_quantity.units(),
            "stock incremented"
        );
        Ok(IncrementReceipt {
            sku_code: sku_code.clone(),
            location_id: location_id.clone(),
            new_quantity,
        })
    }

    /// Remove `amount` units of `sku_code` from `location_id`. Returns
    /// the old and new balance.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for non-positive amounts, `LocationNotFound` if
    /// the location is missing or inactive, `ItemNotFound` if no record
    /// exists, `InsufficientQuantity` (with available vs. required) if
    /// the balance is too low, `Conflict` on a lost commit race.
    pub async fn decrement(
        &self,
        location_id: &LocationId,
        sku_code: &SkuCode,
        amount: Quantity,
    ) -> Result<DecrementReceipt, StockError> {
        require_positive(amount)?;
        let mut tx = self.store.begin().await;
        require_active(&tx, location_id)?;

        let receipt = Self::adjust_for_transfer_out(&mut tx, location_id, sku_code, amount)?;
        self.store.commit(tx).await?;

        info!(
            location_id = %location_id,
            sku_code = %sku_code,
            amount = amount.units(),
            previous_quantity = receipt.previous_quantity.units(),
            new_quantity = receipt.new_quantity.units(),
            "stock decremented"
        );
        Ok(receipt)
    }

    /// All positive-quantity stock at a location, sorted by SKU.
    ///
    /// An empty vector is the valid "no items" outcome, distinct from
    /// the location-not-found failure.
    ///
    /// # Errors
    ///
    /// `LocationNotFound` if the location is missing or inactive.
    pub async fn observe(&self, location_id: &LocationId) -> Result<Vec<StockLevel>, StockError> {
        let tx = self.store.begin().await;
        require_active(&tx, location_id)?;

        let levels = tx
            .positive_stock_at(location_id)
            .into_iter()
            .map(|record| StockLevel {
                sku_code: record.sku_code().clone(),
                quantity: record.quantity(),
            })
            .collect();
        debug!(location_id = %location_id, "stock observed");
        Ok(levels)
    }

    /// Source-side transfer leg: issue `amount` from an existing record
    /// inside an open transaction. Same contract as [`Self::decrement`]
    /// minus the location check, which the transfer engine performs with
    /// side-specific errors.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for non-positive amounts, `ItemNotFound` if no
    /// record exists, `InsufficientQuantity` if the balance is below
    /// `amount`.
    pub fn adjust_for_transfer_out(
        tx: &mut LedgerTx,
        location_id: &LocationId,
        sku_code: &SkuCode,
        amount: Quantity,
    ) -> Result<DecrementReceipt, StockError> {
        require_positive(amount)?;
        let Some(record) = tx.stock(location_id, sku_code) else {
            return Err(StockError::ItemNotFound {
                sku_code: sku_code.as_str().to_string(),
                location_id: location_id.as_str().to_string(),
            });
        };

        let mut record = record.clone();
        let previous_quantity = record.quantity();
        let new_quantity = record.issue(amount, Timestamp::now())?;
        tx.put_stock(record);

        Ok(DecrementReceipt {
            sku_code: sku_code.clone(),
            location_id: location_id.clone(),
            previous_quantity,
            new_quantity,
        })
    }

    /// Destination-side transfer leg: create-or-add `amount` inside an
    /// open transaction. Same create-or-add behavior as
    /// [`Self::increment`]. Returns the new balance.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for non-positive amounts or if the addition
    /// would overflow.
    pub fn adjust_for_transfer_in(
        tx: &mut LedgerTx,
        location_id: &LocationId,
        sku_code: &SkuCode,
        amount: Quantity,
    ) -> Result<Quantity, StockError> {
        tx.upsert_stock_delta(location_id, sku_code, amount, Timestamp::now())
    }
}

fn require_positive(amount: Quantity) -> Result<(), StockError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(StockError::InvalidAmount {
            amount: amount.units(),
        })
    }
}

fn require_active(tx: &LedgerTx, location_id: &LocationId) -> Result<(), StockError> {
    if tx.active_location(location_id).is_some() {
        Ok(())
    } else {
        Err(StockError::LocationNotFound {
            location_id: location_id.as_str().to_string(),
        })
    }
}
