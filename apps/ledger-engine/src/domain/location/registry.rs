//! Location registry service.

use std::sync::Arc;

use tracing::{debug, info};

use super::aggregate::Location;
use super::errors::RegistryError;
use crate::domain::shared::{LocationId, Timestamp};
use crate::domain::store::LedgerStore;

/// How a successful registration was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A brand-new location record was created.
    Created,
    /// An inactive record with the same id was reactivated.
    Reactivated,
}

/// Owns the set of locations and their active/inactive status.
///
/// Location ids are unique across all time: unregistering deactivates
/// the record, and registering the same id later reactivates it rather
/// than creating a distinct entity.
pub struct LocationRegistry {
    store: Arc<dyn LedgerStore>,
}

impl LocationRegistry {
    /// Create a registry over the shared store handle.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Register a location.
    ///
    /// Creates a new active record, or reactivates an inactive one with
    /// the same id. Both are success outcomes.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if an active location uses this id; `Conflict` if
    /// the commit lost a race.
    pub async fn register(&self, location_id: &LocationId) -> Result<RegisterOutcome, RegistryError> {
        let mut tx = self.store.begin().await;
        let now = Timestamp::now();

        let outcome = match tx.location(location_id) {
            Some(existing) if existing.is_active() => {
                return Err(RegistryError::AlreadyExists {
                    location_id: location_id.as_str().to_string(),
                });
            }
            Some(existing) => {
                let mut location = existing.clone();
                location.reactivate(now);
                tx.put_location(location);
                RegisterOutcome::Reactivated
            }
            None => {
                tx.put_location(Location::register(location_id.clone(), now));
                RegisterOutcome::Created
            }
        };

        self.store.commit(tx).await?;
        info!(location_id = %location_id, ?outcome, "location registered");
        Ok(outcome)
    }

    /// Unregister a location.
    ///
    /// The record is deactivated, never deleted; zero-quantity stock
    /// records at the location remain untouched.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record exists; `HasInventory` if any stock
    /// record at this location still has a positive quantity; `Conflict`
    /// if the commit lost a race.
    pub async fn unregister(&self, location_id: &LocationId) -> Result<(), RegistryError> {
        let mut tx = self.store.begin().await;
        let now = Timestamp::now();

        let Some(existing) = tx.location(location_id) else {
            return Err(RegistryError::NotFound {
                location_id: location_id.as_str().to_string(),
            });
        };

        let blocking = tx.positive_record_count(location_id);
        if blocking > 0 {
            debug!(location_id = %location_id, records = blocking, "unregister blocked by inventory");
            return Err(RegistryError::HasInventory {
                location_id: location_id.as_str().to_string(),
                records: blocking,
            });
        }

        let mut location = existing.clone();
        location.deactivate(now);
        tx.put_location(location);

        self.store.commit(tx).await?;
        info!(location_id = %location_id, "location unregistered");
        Ok(())
    }

    /// Look up a location by id, regardless of status.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record exists.
    pub async fn lookup(&self, location_id: &LocationId) -> Result<Location, RegistryError> {
        let tx = self.store.begin().await;
        tx.location(location_id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                location_id: location_id.as_str().to_string(),
            })
    }

    /// Look up a location by id, filtered to active ones.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record exists or the location is inactive.
    pub async fn lookup_active(&self, location_id: &LocationId) -> Result<Location, RegistryError> {
        let tx = self.store.begin().await;
        tx.active_location(location_id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                location_id: location_id.as_str().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{Quantity, SkuCode};
    use crate::infrastructure::persistence::InMemoryLedgerStore;

    fn registry() -> (Arc<InMemoryLedgerStore>, LocationRegistry) {
        let store = Arc::new(InMemoryLedgerStore::new());
        let registry = LocationRegistry::new(Arc::clone(&store) as Arc<dyn LedgerStore>);
        (store, registry)
    }

    #[tokio::test]
    async fn register_creates_active_location() {
        let (_, registry) = registry();
        let outcome = registry.register(&LocationId::new("A1")).await.unwrap();
        assert_eq!(outcome, RegisterOutcome::Created);

        let loc = registry.lookup(&LocationId::new("A1")).await.unwrap();
        assert!(loc.is_active());
    }

    #[tokio::test]
    async fn register_twice_fails_with_already_exists() {
        let (_, registry) = registry();
        registry.register(&LocationId::new("A1")).await.unwrap();

        let err = registry.register(&LocationId::new("A1")).await.unwrap_err();
        assert_eq!(
            err,
            RegistryError::AlreadyExists {
                location_id: "A1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unregister_then_register_reactivates() {
        let (_, registry) = registry();
        let id = LocationId::new("A1");
        registry.register(&id).await.unwrap();
        registry.unregister(&id).await.unwrap();

        assert!(registry.lookup_active(&id).await.is_err());
        // Record is retained, only deactivated.
        assert!(!registry.lookup(&id).await.unwrap().is_active());

        let outcome = registry.register(&id).await.unwrap();
        assert_eq!(outcome, RegisterOutcome::Reactivated);
        assert!(registry.lookup_active(&id).await.is_ok());
    }

    #[tokio::test]
    async fn unregister_unknown_location_fails() {
        let (_, registry) = registry();
        let err = registry.unregister(&LocationId::new("A9")).await.unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                location_id: "A9".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unregister_blocked_by_positive_stock() {
        let (store, registry) = registry();
        let id = LocationId::new("A1");
        registry.register(&id).await.unwrap();

        let mut tx = store.begin().await;
        tx.upsert_stock_delta(&id, &SkuCode::new("SKU1"), Quantity::new(4), Timestamp::now())
            .unwrap();
        store.commit(tx).await.unwrap();

        let err = registry.unregister(&id).await.unwrap_err();
        assert_eq!(
            err,
            RegistryError::HasInventory {
                location_id: "A1".to_string(),
                records: 1,
            }
        );
        // Still active after the failed unregister.
        assert!(registry.lookup_active(&id).await.is_ok());
    }

    #[tokio::test]
    async fn unregister_succeeds_once_stock_is_drained_to_zero() {
        let (store, registry) = registry();
        let id = LocationId::new("A1");
        registry.register(&id).await.unwrap();

        let mut tx = store.begin().await;
        tx.upsert_stock_delta(&id, &SkuCode::new("SKU1"), Quantity::new(4), Timestamp::now())
            .unwrap();
        let mut record = tx.stock(&id, &SkuCode::new("SKU1")).unwrap().clone();
        record.issue(Quantity::new(4), Timestamp::now()).unwrap();
        tx.put_stock(record);
        store.commit(tx).await.unwrap();

        registry.unregister(&id).await.unwrap();
    }
}
