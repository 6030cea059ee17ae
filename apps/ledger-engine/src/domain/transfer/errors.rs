//! Transfer engine errors.

use std::fmt;

use crate::domain::stock::StockError;
use crate::domain::store::StoreError;

/// Errors from the atomic transfer operation.
///
/// Checks run in a fixed order (source location, destination location,
/// same-location, quantity, item, sufficiency), so a multi-cause failure
/// always reports the first cause encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Source location missing or inactive.
    SourceNotFound {
        /// Source location identifier.
        location_id: String,
    },

    /// Destination location missing or inactive.
    DestinationNotFound {
        /// Destination location identifier.
        location_id: String,
    },

    /// Source and destination are the same location.
    SameLocation {
        /// The offending location identifier.
        location_id: String,
    },

    /// Transfer quantity is zero or negative.
    InvalidQuantity {
        /// The rejected quantity.
        quantity: i64,
    },

    /// No stock record for the SKU at the source.
    ItemNotFound {
        /// SKU code.
        sku_code: String,
        /// Source location identifier.
        location_id: String,
    },

    /// Source holds less than the requested quantity.
    InsufficientQuantity {
        /// SKU code.
        sku_code: String,
        /// Source location identifier.
        location_id: String,
        /// Quantity on hand at the source.
        available: i64,
        /// Quantity requested.
        required: i64,
    },

    /// The transaction lost a race with a concurrent write; safe to retry.
    Conflict {
        /// Store-level detail.
        message: String,
    },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotFound { location_id } => {
                write!(f, "Source location {location_id} does not exist or is inactive")
            }
            Self::DestinationNotFound { location_id } => {
                write!(
                    f,
                    "Destination location {location_id} does not exist or is inactive"
                )
            }
            Self::SameLocation { .. } => {
                write!(f, "Source and destination locations must be different")
            }
            Self::InvalidQuantity { .. } => {
                write!(f, "Quantity must be positive")
            }
            Self::ItemNotFound {
                sku_code,
                location_id,
            } => {
                write!(
                    f,
                    "Item {sku_code} does not exist at source location {location_id}"
                )
            }
            Self::InsufficientQuantity {
                location_id,
                available,
                required,
                ..
            } => {
                write!(
                    f,
                    "Insufficient quantity at {location_id}. \
                     Available: {available}, Required: {required}"
                )
            }
            Self::Conflict { message } => {
                write!(f, "Concurrent ledger update: {message}")
            }
        }
    }
}

impl std::error::Error for TransferError {}

impl From<StoreError> for TransferError {
    fn from(err: StoreError) -> Self {
        Self::Conflict {
            message: err.to_string(),
        }
    }
}

impl From<StockError> for TransferError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::ItemNotFound {
                sku_code,
                location_id,
            } => Self::ItemNotFound {
                sku_code,
                location_id,
            },
            StockError::InsufficientQuantity {
                sku_code,
                location_id,
                available,
                required,
            } => Self::InsufficientQuantity {
                sku_code,
                location_id,
                available,
                required,
            },
            StockError::Conflict { message } => Self::Conflict { message },
            // The engine validates locations and positivity before the
            // legs run; these arms are unreachable from a transfer.
            StockError::LocationNotFound { location_id } => Self::SourceNotFound { location_id },
            StockError::InvalidAmount { amount } => Self::InvalidQuantity { quantity: amount },
        }
    }
}
