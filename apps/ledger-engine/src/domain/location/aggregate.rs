//! Location entity.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{LocationId, Timestamp};

/// A named storage location that can hold stock.
///
/// Locations are never hard-deleted: unregistering deactivates the
/// record, and a later registration of the same id reactivates it. The
/// id is therefore unique across all time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Location {
    /// Create a freshly registered (active) location.
    #[must_use]
    pub fn register(id: LocationId, now: Timestamp) -> Self {
        Self {
            id,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Unique location identifier.
    #[must_use]
    pub const fn id(&self) -> &LocationId {
        &self.id
    }

    /// Whether this location currently accepts stock mutations.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// When the location was first registered.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// When the location was last touched.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Reactivate a previously unregistered location.
    pub fn reactivate(&mut self, now: Timestamp) {
        self.active = true;
        self.updated_at = now;
    }

    /// Deactivate the location. The record is retained for history.
    pub fn deactivate(&mut self, now: Timestamp) {
        self.active = false;
        self.updated_at = now;
    }
}
