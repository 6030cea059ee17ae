//! Shared Domain Types
//!
//! Value objects used across the location, stock, and transfer contexts.

pub mod value_objects;

pub use value_objects::{LocationId, Quantity, SkuCode, Timestamp};
