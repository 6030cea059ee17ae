//! Ledger Engine Binary
//!
//! Runs the warehouse ledger behind a line-oriented command loop on
//! stdin.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ledger-engine
//! ```
//!
//! # Environment Variables
//!
//! - `LEDGER_LOG`: tracing filter (default: info)
//! - `LEDGER_TRANSFER_RETRIES`: commit-conflict retries per transfer (default: 1)
//!
//! # Commands
//!
//! ```text
//! LOCATION REGISTER <LOCATION_ID>
//! LOCATION UNREGISTER <LOCATION_ID>
//! INVENTORY INCREMENT <LOCATION_ID> <SKU> <QUANTITY>
//! INVENTORY DECREMENT <LOCATION_ID> <SKU> <QUANTITY>
//! INVENTORY OBSERVE <LOCATION_ID>
//! INVENTORY TRANSFER <SRC> <DEST> <SKU> <QUANTITY>
//! EXIT
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ledger_engine::config::EngineConfig;
use ledger_engine::infrastructure::cli::{self, DriverResponse, LedgerDriver};
use ledger_engine::infrastructure::persistence::InMemoryLedgerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = EngineConfig::from_env().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).context("parsing LEDGER_LOG filter")?,
        )
        .with_writer(std::io::stderr)
        .init();

    let store = Arc::new(InMemoryLedgerStore::new());
    let driver = LedgerDriver::new(store, config.transfer_retries);
    info!(transfer_retries = config.transfer_retries, "ledger engine started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let response = match cli::parse(&line) {
            Ok(command) => driver.dispatch(command).await,
            Err(err) => DriverResponse::Output(cli::output::parse_error(&err)),
        };
        match response {
            DriverResponse::Output(text) => println!("{text}"),
            DriverResponse::Exit => break,
        }
    }

    info!("ledger engine stopped");
    Ok(())
}
