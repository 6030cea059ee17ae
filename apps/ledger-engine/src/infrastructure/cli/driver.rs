//! Command driver: wires parsed commands to the ledger components.

use std::sync::Arc;

use tracing::warn;

use super::command::Command;
use super::output;
use crate::domain::location::LocationRegistry;
use crate::domain::shared::Quantity;
use crate::domain::stock::StockLedger;
use crate::domain::store::LedgerStore;
use crate::domain::transfer::{TransferEngine, TransferError};

/// What the driver wants done with a dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverResponse {
    /// Print this text and continue.
    Output(String),
    /// End the command loop.
    Exit,
}

/// Thin driver over the core components.
///
/// Holds one instance of each service, all sharing the same store
/// handle. Transfers that lose a commit race are retried a configured
/// number of times before the conflict is reported.
pub struct LedgerDriver {
    registry: LocationRegistry,
    ledger: StockLedger,
    engine: TransferEngine,
    transfer_retries: u32,
}

impl LedgerDriver {
    /// Wire the components over a shared store.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>, transfer_retries: u32) -> Self {
        Self {
            registry: LocationRegistry::new(Arc::clone(&store)),
            ledger: StockLedger::new(Arc::clone(&store)),
            engine: TransferEngine::new(store),
            transfer_retries,
        }
    }

    /// Execute one command and render its outcome.
    pub async fn dispatch(&self, command: Command) -> DriverResponse {
        let text = match command {
            Command::Exit => return DriverResponse::Exit,
            Command::RegisterLocation { location_id } => {
                let result = self
                    .registry
                    .register(&location_id)
                    .await
                    .map(|_| location_id);
                output::register(&result)
            }
            Command::UnregisterLocation { location_id } => {
                let result = self
                    .registry
                    .unregister(&location_id)
                    .await
                    .map(|()| location_id);
                output::unregister(&result)
            }
            Command::Increment {
                location_id,
                sku_code,
                amount,
            } => {
                let result = self
                    .ledger
                    .increment(&location_id, &sku_code, Quantity::new(amount))
                    .await;
                output::increment(&result)
            }
            Command::Decrement {
                location_id,
                sku_code,
                amount,
            } => {
                let result = self
                    .ledger
                    .decrement(&location_id, &sku_code, Quantity::new(amount))
                    .await;
                output::decrement(&result)
            }
            Command::Observe { location_id } => {
                let result = self.ledger.observe(&location_id).await;
                output::observe(&location_id, &result)
            }
            Command::Transfer {
                source,
                destination,
                sku_code,
                quantity,
            } => {
                let mut attempts = 0;
                let result = loop {
                    match self
                        .engine
                        .transfer(&source, &destination, &sku_code, Quantity::new(quantity))
                        .await
                    {
                        Err(TransferError::Conflict { message }) if attempts < self.transfer_retries => {
                            attempts += 1;
                            warn!(attempts, %message, "transfer conflicted, retrying");
                        }
                        other => break other.map(|_| ()),
                    }
                };
                output::transfer(&result)
            }
        };
        DriverResponse::Output(text)
    }
}

#[cfg(test)]
mod tests {
    use super::super::command::parse;
    use super::*;
    use crate::infrastructure::persistence::InMemoryLedgerStore;

    fn driver() -> LedgerDriver {
        LedgerDriver::new(Arc::new(InMemoryLedgerStore::new()), 1)
    }

    async fn run(driver: &LedgerDriver, line: &str) -> String {
        match driver.dispatch(parse(line).unwrap()).await {
            DriverResponse::Output(text) => text,
            DriverResponse::Exit => panic!("unexpected exit"),
        }
    }

    #[tokio::test]
    async fn register_increment_observe_round() {
        let driver = driver();
        assert_eq!(
            run(&driver, "LOCATION REGISTER A1").await,
            "LOCATION_REGISTERED: A1"
        );
        assert_eq!(
            run(&driver, "INVENTORY INCREMENT A1 SKU1 10").await,
            "INVENTORY_INCREMENTED: SKU1 at A1, new quantity: 10"
        );
        assert_eq!(run(&driver, "INVENTORY OBSERVE A1").await, "ITEM SKU1 10");
    }

    #[tokio::test]
    async fn transfer_round_prints_ok() {
        let driver = driver();
        run(&driver, "LOCATION REGISTER A1").await;
        run(&driver, "LOCATION REGISTER A2").await;
        run(&driver, "INVENTORY INCREMENT A1 SKU1 10").await;

        assert_eq!(run(&driver, "INVENTORY TRANSFER A1 A2 SKU1 6").await, "OK");
        assert_eq!(run(&driver, "INVENTORY OBSERVE A1").await, "ITEM SKU1 4");
        assert_eq!(run(&driver, "INVENTORY OBSERVE A2").await, "ITEM SKU1 6");
    }

    #[tokio::test]
    async fn exit_command_ends_the_loop() {
        let driver = driver();
        assert_eq!(
            driver.dispatch(parse("EXIT").unwrap()).await,
            DriverResponse::Exit
        );
    }

    #[tokio::test]
    async fn failures_render_with_failed_prefixes() {
        let driver = driver();
        assert_eq!(
            run(&driver, "INVENTORY INCREMENT A1 SKU1 10").await,
            "INVENTORY_INCREMENT_FAILED: Location A1 does not exist"
        );
        assert_eq!(
            run(&driver, "INVENTORY OBSERVE A1").await,
            "ERR: Location 'A1' does not exist"
        );
    }
}
