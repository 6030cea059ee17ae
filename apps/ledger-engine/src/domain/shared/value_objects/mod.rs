//! Shared value objects.

mod identifiers;
mod quantity;
mod timestamp;

pub use identifiers::{LocationId, SkuCode};
pub use quantity::Quantity;
pub use timestamp::Timestamp;
