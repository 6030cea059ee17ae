//! Text rendering of ledger outcomes.
//!
//! One function per operation, producing the driver's stable output
//! vocabulary (`LOCATION_REGISTERED: …`, `ITEM <SKU> <QTY>` lines,
//! `EMPTY`, `OK`, `*_FAILED: …`).

use crate::domain::location::RegistryError;
use crate::domain::shared::LocationId;
use crate::domain::stock::{DecrementReceipt, IncrementReceipt, StockError, StockLevel};
use crate::domain::transfer::TransferError;

use super::command::CommandParseError;

/// Render a register outcome.
#[must_use]
pub fn register(result: &Result<LocationId, RegistryError>) -> String {
    match result {
        Ok(location_id) => format!("LOCATION_REGISTERED: {location_id}"),
        Err(err) => format!("LOCATION_REGISTER_FAILED: {err}"),
    }
}

/// Render an unregister outcome.
#[must_use]
pub fn unregister(result: &Result<LocationId, RegistryError>) -> String {
    match result {
        Ok(location_id) => format!("LOCATION_UNREGISTERED: {location_id}"),
        Err(err) => format!("LOCATION_UNREGISTER_FAILED: {err}"),
    }
}

/// Render an increment outcome.
#[must_use]
pub fn increment(result: &Result<IncrementReceipt, StockError>) -> String {
    match result {
        Ok(receipt) => format!(
            "INVENTORY_INCREMENTED: {} at {}, new quantity: {}",
            receipt.sku_code, receipt.location_id, receipt.new_quantity
        ),
        Err(err) => format!("INVENTORY_INCREMENT_FAILED: {err}"),
    }
}

/// Render a decrement outcome.
#[must_use]
pub fn decrement(result: &Result<DecrementReceipt, StockError>) -> String {
    match result {
        Ok(receipt) => format!(
            "INVENTORY_DECREMENTED: {} at {} from {} to {}",
            receipt.sku_code, receipt.location_id, receipt.previous_quantity, receipt.new_quantity
        ),
        Err(err) => format!("INVENTORY_DECREMENT_FAILED: {err}"),
    }
}

/// Render an observation: one `ITEM` line per SKU, `EMPTY` when the
/// location holds nothing, or an `ERR:` line on failure.
#[must_use]
pub fn observe(location_id: &LocationId, result: &Result<Vec<StockLevel>, StockError>) -> String {
    match result {
        Ok(levels) if levels.is_empty() => "EMPTY".to_string(),
        Ok(levels) => levels
            .iter()
            .map(|level| format!("ITEM {} {}", level.sku_code, level.quantity))
            .collect::<Vec<_>>()
            .join("\n"),
        Err(StockError::LocationNotFound { .. }) => {
            format!("ERR: Location '{location_id}' does not exist")
        }
        Err(err) => format!("ERR: {err}"),
    }
}

/// Render a transfer outcome.
#[must_use]
pub fn transfer(result: &Result<(), TransferError>) -> String {
    match result {
        Ok(()) => "OK".to_string(),
        Err(err) => format!("INVENTORY_TRANSFER_FAILED: {err}"),
    }
}

/// Render a command parse failure.
#[must_use]
pub fn parse_error(err: &CommandParseError) -> String {
    format!("ERR: {err}")
}
