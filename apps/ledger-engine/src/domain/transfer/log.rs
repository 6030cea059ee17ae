//! Transfer log: append-only history of completed transfers.

use std::sync::Arc;

use super::record::TransferRecord;
use crate::domain::shared::{LocationId, Quantity, SkuCode, Timestamp};
use crate::domain::store::{LedgerStore, LedgerTx, StoreError};

/// Filter for transfer history queries. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferFilter {
    /// Match only this SKU.
    pub sku_code: Option<SkuCode>,
    /// Match only transfers out of this location.
    pub source_location_id: Option<LocationId>,
    /// Match only transfers into this location.
    pub destination_location_id: Option<LocationId>,
}

impl TransferFilter {
    /// Whether a record passes the filter.
    #[must_use]
    pub fn matches(&self, record: &TransferRecord) -> bool {
        self.sku_code
            .as_ref()
            .is_none_or(|sku| record.sku_code() == sku)
            && self
                .source_location_id
                .as_ref()
                .is_none_or(|loc| record.source_location_id() == loc)
            && self
                .destination_location_id
                .as_ref()
                .is_none_or(|loc| record.destination_location_id() == loc)
    }
}

/// Read surface over the append-only transfer history.
///
/// Appends happen only inside the transfer engine's transaction;
/// records are immutable once written.
pub struct TransferLog {
    store: Arc<dyn LedgerStore>,
}

impl TransferLog {
    /// Create a log view over the shared store handle.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// List completed transfers matching `filter`, oldest first.
    ///
    /// # Errors
    ///
    /// Propagates store failures; the read itself has no domain
    /// failure modes.
    pub async fn list(&self, filter: &TransferFilter) -> Result<Vec<TransferRecord>, StoreError> {
        let tx = self.store.begin().await;
        Ok(tx
            .transfers()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    /// Append one record inside an open transfer transaction.
    pub(crate) fn append(
        tx: &mut LedgerTx,
        sku_code: SkuCode,
        source_location_id: LocationId,
        destination_location_id: LocationId,
        quantity: Quantity,
        now: Timestamp,
    ) -> TransferRecord {
        tx.append_transfer(
            sku_code,
            source_location_id,
            destination_location_id,
            quantity,
            now,
        )
    }
}
