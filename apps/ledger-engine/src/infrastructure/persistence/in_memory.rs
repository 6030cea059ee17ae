//! In-memory ledger store.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::store::{LedgerStore, LedgerTx, StoreError, Tables};

#[derive(Debug, Default)]
struct Committed {
    tables: Tables,
    version: u64,
}

/// In-memory implementation of [`LedgerStore`].
///
/// Transactions stage a snapshot of the committed tables; commit is
/// optimistic and versioned. Two transactions racing on the same base
/// version serialize: the first commit wins, the second fails with
/// [`StoreError::Conflict`] and can be retried on fresh state. No
/// partial effect is ever visible to a concurrent reader.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    inner: RwLock<Committed>,
}

impl InMemoryLedgerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current committed version, for diagnostics.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.read().unwrap().version
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn begin(&self) -> LedgerTx {
        let committed = self.inner.read().unwrap();
        LedgerTx::new(committed.tables.clone(), committed.version)
    }

    async fn commit(&self, tx: LedgerTx) -> Result<(), StoreError> {
        let (tables, base_version) = tx.into_parts();
        let mut committed = self.inner.write().unwrap();
        if committed.version != base_version {
            debug!(
                base = base_version,
                committed = committed.version,
                "commit conflict"
            );
            return Err(StoreError::Conflict {
                base: base_version,
                committed: committed.version,
            });
        }
        committed.tables = tables;
        committed.version += 1;
        Ok(())
    }
}
