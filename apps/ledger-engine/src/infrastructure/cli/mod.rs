//! Text command driver.
//!
//! Thin plumbing over the core: parses one command per line, invokes
//! the matching ledger operation, and renders a stable text outcome.

pub mod command;
pub mod driver;
pub mod output;

pub use command::{Command, CommandParseError, parse};
pub use driver::{DriverResponse, LedgerDriver};
