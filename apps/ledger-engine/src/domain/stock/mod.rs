//! Stock Context
//!
//! Per-(location, SKU) quantity records and the ledger service that
//! mutates them under the non-negativity and location-active invariants.

pub mod errors;
pub mod ledger;
pub mod record;

pub use errors::StockError;
pub use ledger::{DecrementReceipt, IncrementReceipt, StockLedger, StockLevel};
pub use record::StockRecord;
