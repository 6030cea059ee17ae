//! Location registry errors.

use std::fmt;

use crate::domain::store::StoreError;

/// Errors from location lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An active location already uses this id.
    AlreadyExists {
        /// Location identifier.
        location_id: String,
    },

    /// No location record exists for this id.
    NotFound {
        /// Location identifier.
        location_id: String,
    },

    /// Unregister blocked by stock still on hand.
    HasInventory {
        /// Location identifier.
        location_id: String,
        /// Number of positive-quantity stock records.
        records: usize,
    },

    /// The transaction lost a race with a concurrent write; safe to retry.
    Conflict {
        /// Store-level detail.
        message: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists { location_id } => {
                write!(f, "Location {location_id} already exists")
            }
            Self::NotFound { location_id } => {
                write!(f, "Location {location_id} does not exist")
            }
            Self::HasInventory {
                location_id,
                records,
            } => {
                write!(f, "Location {location_id} has {records} inventory record(s)")
            }
            Self::Conflict { message } => {
                write!(f, "Concurrent ledger update: {message}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        Self::Conflict {
            message: err.to_string(),
        }
    }
}
