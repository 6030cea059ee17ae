//! Infrastructure Layer
//!
//! Adapters around the domain core:
//!
//! - [`persistence`]: ledger store implementations
//! - [`cli`]: the text command driver

pub mod cli;
pub mod persistence;
