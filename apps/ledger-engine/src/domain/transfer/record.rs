//! Transfer record entity.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{LocationId, Quantity, SkuCode, Timestamp};

/// One completed cross-location movement.
///
/// Records are immutable once written: the store assigns the sequence id
/// and nothing mutates or deletes them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    id: u64,
    sku_code: SkuCode,
    source_location_id: LocationId,
    destination_location_id: LocationId,
    quantity: Quantity,
    created_at: Timestamp,
}

impl TransferRecord {
    /// Build a record with a store-assigned sequence id.
    ///
    /// Only the ledger store creates these, from within a committed
    /// transfer transaction.
    #[must_use]
    pub(crate) fn new(
        id: u64,
        sku_code: SkuCode,
        source_location_id: LocationId,
        destination_location_id: LocationId,
        quantity: Quantity,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            sku_code,
            source_location_id,
            destination_location_id,
            quantity,
            created_at,
        }
    }

    /// Auto-assigned sequence id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// SKU that was moved.
    #[must_use]
    pub const fn sku_code(&self) -> &SkuCode {
        &self.sku_code
    }

    /// Location the stock left.
    #[must_use]
    pub const fn source_location_id(&self) -> &LocationId {
        &self.source_location_id
    }

    /// Location the stock arrived at.
    #[must_use]
    pub const fn destination_location_id(&self) -> &LocationId {
        &self.destination_location_id
    }

    /// Amount moved; always positive.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// When the transfer committed.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
