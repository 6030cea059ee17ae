//! Transfer engine: atomic cross-location moves.

use std::sync::Arc;

use tracing::info;

use super::errors::TransferError;
use super::log::TransferLog;
use super::record::TransferRecord;
use crate::domain::shared::{LocationId, Quantity, SkuCode, Timestamp};
use crate::domain::stock::StockLedger;
use crate::domain::store::LedgerStore;

/// Result of a successful transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    /// The appended history record.
    pub record: TransferRecord,
    /// Source balance after the move.
    pub source_remaining: Quantity,
    /// Destination balance after the move.
    pub destination_quantity: Quantity,
}

/// Performs atomic transfers between locations.
///
/// The engine is stateless between calls: each transfer is a single
/// all-or-nothing transition over the source record, the destination
/// record, and the transfer log. A failure at any step leaves the
/// ledger exactly as it was.
pub struct TransferEngine {
    store: Arc<dyn LedgerStore>,
}

impl TransferEngine {
    /// Create an engine over the shared store handle.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Move `quantity` units of `sku_code` from `source` to
    /// `destination`, appending one transfer record.
    ///
    /// Validation order is fixed: source location, destination location,
    /// same-location, quantity positivity, item existence at source,
    /// sufficiency. The first failing check is reported and nothing is
    /// applied.
    ///
    /// # Errors
    ///
    /// See [`TransferError`]; `Conflict` means the commit lost a race
    /// with a concurrent writer and the call can be retried.
    pub async fn transfer(
        &self,
        source: &LocationId,
        destination: &LocationId,
        sku_code: &SkuCode,
        quantity: Quantity,
    ) -> Result<TransferReceipt, TransferError> {
        let mut tx = self.store.begin().await;

        if tx.active_location(source).is_none() {
            return Err(TransferError::SourceNotFound {
                location_id: source.as_str().to_string(),
            });
        }
        if tx.active_location(destination).is_none() {
            return Err(TransferError::DestinationNotFound {
                location_id: destination.as_str().to_string(),
            });
        }
        if source == destination {
            return Err(TransferError::SameLocation {
                location_id: source.as_str().to_string(),
            });
        }
        if !quantity.is_positive() {
            return Err(TransferError::InvalidQuantity {
                quantity: quantity.units(),
            });
        }

        let outbound = StockLedger::adjust_for_transfer_out(&mut tx, source, sku_code, quantity)?;
        let destination_quantity =
            StockLedger::adjust_for_transfer_in(&mut tx, destination, sku_code, quantity)?;
        let record = TransferLog::append(
            &mut tx,
            sku_code.clone(),
            source.clone(),
            destination.clone(),
            quantity,
            Timestamp::now(),
        );

        self.store.commit(tx).await?;

        info!(
            transfer_id = record.id(),
            sku_code = %sku_code,
            source = %source,
            destination = %destination,
            quantity = quantity.units(),
            source_remaining = outbound.new_quantity.units(),
            "transfer committed"
        );
        Ok(TransferReceipt {
            record,
            source_remaining: outbound.new_quantity,
            destination_quantity,
        })
    }
}
