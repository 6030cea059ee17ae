//! Transfer Context
//!
//! Atomic cross-location moves and the append-only history they leave
//! behind.

pub mod engine;
pub mod errors;
pub mod log;
pub mod record;

pub use engine::{TransferEngine, TransferReceipt};
pub use errors::TransferError;
pub use log::{TransferFilter, TransferLog};
pub use record::TransferRecord;
