//! Ledger store adapters.
//!
//! The in-memory adapter ships with the engine; durable stores live
//! behind the same [`crate::domain::store::LedgerStore`] port.

mod in_memory;

pub use in_memory::InMemoryLedgerStore;
