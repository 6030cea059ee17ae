//! Engine configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `LEDGER_LOG` | `info` | tracing filter directive |
//! | `LEDGER_TRANSFER_RETRIES` | `1` | commit-conflict retries per transfer |

use thiserror::Error;

/// Default tracing filter.
const DEFAULT_LOG_FILTER: &str = "info";

/// Default number of transfer retries after a commit conflict.
const DEFAULT_TRANSFER_RETRIES: u32 = 1;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value of the wrong type.
    #[error("invalid value for {variable}: '{value}'")]
    InvalidValue {
        /// Variable name.
        variable: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Parsed engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tracing filter directive, e.g. `info` or `ledger_engine=debug`.
    pub log_filter: String,
    /// How many times the driver retries a conflicted transfer commit.
    pub transfer_retries: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            transfer_retries: DEFAULT_TRANSFER_RETRIES,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but
    /// unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(filter) = std::env::var("LEDGER_LOG") {
            config.log_filter = filter;
        }
        if let Ok(value) = std::env::var("LEDGER_TRANSFER_RETRIES") {
            config.transfer_retries =
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        variable: "LEDGER_TRANSFER_RETRIES",
                        value,
                    })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.transfer_retries, 1);
    }
}
