//! Stock ledger errors.

use std::fmt;

use crate::domain::store::StoreError;

/// Errors from stock ledger operations.
///
/// Every variant is an expected validation outcome reported to the
/// caller; none of them leave partial state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    /// The location does not exist or is inactive.
    LocationNotFound {
        /// Location identifier.
        location_id: String,
    },

    /// No stock record exists for this SKU at this location.
    ItemNotFound {
        /// SKU code.
        sku_code: String,
        /// Location identifier.
        location_id: String,
    },

    /// The record holds less than the requested amount.
    InsufficientQuantity {
        /// SKU code.
        sku_code: String,
        /// Location identifier.
        location_id: String,
        /// Quantity currently on hand.
        available: i64,
        /// Quantity that was requested.
        required: i64,
    },

    /// The amount is not a usable positive integer.
    InvalidAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// The transaction lost a race with a concurrent write; safe to retry.
    Conflict {
        /// Store-level detail.
        message: String,
    },
}

impl fmt::Display for StockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocationNotFound { location_id } => {
                write!(f, "Location {location_id} does not exist")
            }
            Self::ItemNotFound {
                sku_code,
                location_id,
            } => {
                write!(f, "Item {sku_code} does not exist at location {location_id}")
            }
            Self::InsufficientQuantity {
                sku_code,
                location_id,
                available,
                required,
            } => {
                write!(
                    f,
                    "Insufficient quantity for {sku_code} at {location_id}. \
                     Available: {available}, Required: {required}"
                )
            }
            Self::InvalidAmount { amount } => {
                write!(f, "Amount must be a positive integer, got {amount}")
            }
            Self::Conflict { message } => {
                write!(f, "Concurrent ledger update: {message}")
            }
        }
    }
}

impl std::error::Error for StockError {}

impl From<StoreError> for StockError {
    fn from(err: StoreError) -> Self {
        Self::Conflict {
            message: err.to_string(),
        }
    }
}
