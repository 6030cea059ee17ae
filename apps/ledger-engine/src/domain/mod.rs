//! Domain Layer
//!
//! Business logic with no infrastructure dependencies beyond the store
//! port it defines:
//!
//! - [`location`]: location lifecycle (register, unregister, reactivate)
//! - [`stock`]: per-(location, SKU) quantity records and their invariants
//! - [`transfer`]: atomic cross-location moves and the transfer log
//! - [`store`]: the injected entity-store port and its unit of work
//! - [`shared`]: value objects used by all contexts

pub mod location;
pub mod shared;
pub mod stock;
pub mod store;
pub mod transfer;
