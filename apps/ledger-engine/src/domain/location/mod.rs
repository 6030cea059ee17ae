//! Location Context
//!
//! Location lifecycle: registration, deactivation, reactivation. Ids
//! are unique across all time; records are never hard-deleted.

pub mod aggregate;
pub mod errors;
pub mod registry;

pub use aggregate::Location;
pub use errors::RegistryError;
pub use registry::{LocationRegistry, RegisterOutcome};
