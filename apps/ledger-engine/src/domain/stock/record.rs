//! Stock record entity.

use serde::{Deserialize, Serialize};

use super::errors::StockError;
use crate::domain::shared::{LocationId, Quantity, SkuCode, Timestamp};

/// Per-(SKU, location) stock count.
///
/// `quantity` is the current balance and never goes negative.
/// `original_quantity` is the cumulative lifetime total ever received at
/// this location and only grows; issues never reduce it. Records are
/// created lazily on the first inbound movement and persist at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    sku_code: SkuCode,
    location_id: LocationId,
    quantity: Quantity,
    original_quantity: Quantity,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl StockRecord {
    /// Open a new record with an initial inbound amount.
    ///
    /// Both `quantity` and `original_quantity` start at `amount`. The
    /// caller must have validated that `amount` is positive.
    #[must_use]
    pub fn open(sku_code: SkuCode, location_id: LocationId, amount: Quantity, now: Timestamp) -> Self {
        Self {
            sku_code,
            location_id,
            quantity: amount,
            original_quantity: amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// SKU this record counts.
    #[must_use]
    pub const fn sku_code(&self) -> &SkuCode {
        &self.sku_code
    }

    /// Location this record belongs to.
    #[must_use]
    pub const fn location_id(&self) -> &LocationId {
        &self.location_id
    }

    /// Current balance.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Cumulative lifetime inbound total.
    #[must_use]
    pub const fn original_quantity(&self) -> Quantity {
        self.original_quantity
    }

    /// When the record was created.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// When the record was last mutated.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Receive `amount` units: adds to both the balance and the lifetime
    /// total. Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the addition would overflow.
    pub fn receive(&mut self, amount: Quantity, now: Timestamp) -> Result<Quantity, StockError> {
        let quantity = self
            .quantity
            .checked_add(amount)
            .ok_or(StockError::InvalidAmount {
                amount: amount.units(),
            })?;
        let original = self
            .original_quantity
            .checked_add(amount)
            .ok_or(StockError::InvalidAmount {
                amount: amount.units(),
            })?;
        self.quantity = quantity;
        self.original_quantity = original;
        self.updated_at = now;
        Ok(self.quantity)
    }

    /// Issue `amount` units: subtracts from the balance only. The
    /// lifetime total is untouched. Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientQuantity` if the balance is below `amount`;
    /// the record is unchanged in that case.
    pub fn issue(&mut self, amount: Quantity, now: Timestamp) -> Result<Quantity, StockError> {
        if self.quantity < amount {
            return Err(StockError::InsufficientQuantity {
                sku_code: self.sku_code.as_str().to_string(),
                location_id: self.location_id.as_str().to_string(),
                available: self.quantity.units(),
                required: amount.units(),
            });
        }
        // quantity >= amount > 0, so this cannot underflow.
        self.quantity = self
            .quantity
            .checked_sub(amount)
            .unwrap_or(Quantity::ZERO);
        self.updated_at = now;
        Ok(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn record(amount: i64) -> StockRecord {
        StockRecord::open(
            SkuCode::new("SKU1"),
            LocationId::new("A1"),
            Quantity::new(amount),
            ts("2026-01-05T10:00:00Z"),
        )
    }

    #[test]
    fn open_sets_both_quantities() {
        let rec = record(10);
        assert_eq!(rec.quantity(), Quantity::new(10));
        assert_eq!(rec.original_quantity(), Quantity::new(10));
    }

    #[test]
    fn receive_adds_to_balance_and_lifetime_total() {
        let mut rec = record(10);
        let new = rec
            .receive(Quantity::new(5), ts("2026-01-05T11:00:00Z"))
            .unwrap();
        assert_eq!(new, Quantity::new(15));
        assert_eq!(rec.original_quantity(), Quantity::new(15));
    }

    #[test]
    fn issue_reduces_balance_only() {
        let mut rec = record(10);
        let new = rec
            .issue(Quantity::new(6), ts("2026-01-05T11:00:00Z"))
            .unwrap();
        assert_eq!(new, Quantity::new(4));
        assert_eq!(rec.original_quantity(), Quantity::new(10));
    }

    #[test]
    fn issue_beyond_balance_is_rejected_without_side_effect() {
        let mut rec = record(10);
        let err = rec
            .issue(Quantity::new(15), ts("2026-01-05T11:00:00Z"))
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
        assert_eq!(rec.quantity(), Quantity::new(10));
        assert_eq!(rec.updated_at(), ts("2026-01-05T10:00:00Z"));
    }

    #[test]
    fn issue_to_zero_keeps_record_usable() {
        let mut rec = record(10);
        rec.issue(Quantity::new(10), ts("2026-01-05T11:00:00Z"))
            .unwrap();
        assert_eq!(rec.quantity(), Quantity::ZERO);

        rec.receive(Quantity::new(3), ts("2026-01-05T12:00:00Z"))
            .unwrap();
        assert_eq!(rec.quantity(), Quantity::new(3));
        assert_eq!(rec.original_quantity(), Quantity::new(13));
    }

    #[test]
    fn receive_overflow_is_rejected() {
        let mut rec = record(i64::MAX - 1);
        let err = rec
            .receive(Quantity::new(5), ts("2026-01-05T11:00:00Z"))
            .unwrap_err();
        assert!(matches!(err, StockError::InvalidAmount { .. }));
        assert_eq!(rec.quantity(), Quantity::new(i64::MAX - 1));
    }
}
