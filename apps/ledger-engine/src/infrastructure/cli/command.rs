//! Text command parsing for the ledger driver.
//!
//! Grammar (whitespace-separated, verbs case-insensitive):
//!
//! ```text
//! LOCATION REGISTER <LOCATION_ID>
//! LOCATION UNREGISTER <LOCATION_ID>
//! INVENTORY INCREMENT <LOCATION_ID> <SKU> <QUANTITY>
//! INVENTORY DECREMENT <LOCATION_ID> <SKU> <QUANTITY>
//! INVENTORY OBSERVE <LOCATION_ID>
//! INVENTORY TRANSFER <SRC_LOCATION_ID> <DEST_LOCATION_ID> <SKU> <QUANTITY>
//! EXIT | QUIT
//! ```

use thiserror::Error;

use crate::domain::shared::{LocationId, SkuCode};

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `LOCATION REGISTER`.
    RegisterLocation {
        /// Location to register.
        location_id: LocationId,
    },
    /// `LOCATION UNREGISTER`.
    UnregisterLocation {
        /// Location to unregister.
        location_id: LocationId,
    },
    /// `INVENTORY INCREMENT`.
    Increment {
        /// Receiving location.
        location_id: LocationId,
        /// SKU to receive.
        sku_code: SkuCode,
        /// Amount, as given on the wire (validated by the ledger).
        amount: i64,
    },
    /// `INVENTORY DECREMENT`.
    Decrement {
        /// Issuing location.
        location_id: LocationId,
        /// SKU to issue.
        sku_code: SkuCode,
        /// Amount, as given on the wire (validated by the ledger).
        amount: i64,
    },
    /// `INVENTORY OBSERVE`.
    Observe {
        /// Location to list.
        location_id: LocationId,
    },
    /// `INVENTORY TRANSFER`.
    Transfer {
        /// Source location.
        source: LocationId,
        /// Destination location.
        destination: LocationId,
        /// SKU to move.
        sku_code: SkuCode,
        /// Amount, as given on the wire (validated by the engine).
        quantity: i64,
    },
    /// `EXIT` / `QUIT`: end the command loop.
    Exit,
}

/// Command parse failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    /// Blank input line.
    #[error("empty command")]
    Empty,

    /// First word is not a known command group.
    #[error("unknown command: {0}. Use LOCATION or INVENTORY")]
    UnknownCommand(String),

    /// Unknown action within a known group.
    #[error("invalid action: {action}. Use {expected}")]
    UnknownAction {
        /// The rejected action word.
        action: String,
        /// Valid actions for the group.
        expected: &'static str,
    },

    /// Too few or too many arguments for the action.
    #[error("{action} expects {expected} argument(s)")]
    WrongArgumentCount {
        /// The action word.
        action: &'static str,
        /// Expected argument count.
        expected: usize,
    },

    /// Quantity argument is not an integer.
    #[error("quantity must be an integer, got '{0}'")]
    InvalidQuantity(String),
}

/// Parse one input line into a [`Command`].
///
/// # Errors
///
/// Returns a [`CommandParseError`] describing the first problem found.
pub fn parse(line: &str) -> Result<Command, CommandParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((head, rest)) = words.split_first() else {
        return Err(CommandParseError::Empty);
    };

    match head.to_ascii_uppercase().as_str() {
        "EXIT" | "QUIT" => Ok(Command::Exit),
        "LOCATION" => parse_location(rest),
        "INVENTORY" => parse_inventory(rest),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_location(words: &[&str]) -> Result<Command, CommandParseError> {
    let Some((action, args)) = words.split_first() else {
        return Err(CommandParseError::UnknownAction {
            action: String::new(),
            expected: "REGISTER or UNREGISTER",
        });
    };

    match action.to_ascii_uppercase().as_str() {
        "REGISTER" => {
            let [id] = require_args::<1>("REGISTER", args)?;
            Ok(Command::RegisterLocation {
                location_id: LocationId::new(id),
            })
        }
        "UNREGISTER" => {
            let [id] = require_args::<1>("UNREGISTER", args)?;
            Ok(Command::UnregisterLocation {
                location_id: LocationId::new(id),
            })
        }
        other => Err(CommandParseError::UnknownAction {
            action: other.to_string(),
            expected: "REGISTER or UNREGISTER",
        }),
    }
}

fn parse_inventory(words: &[&str]) -> Result<Command, CommandParseError> {
    let Some((action, args)) = words.split_first() else {
        return Err(CommandParseError::UnknownAction {
            action: String::new(),
            expected: "INCREMENT, DECREMENT, OBSERVE, or TRANSFER",
        });
    };

    match action.to_ascii_uppercase().as_str() {
        "INCREMENT" => {
            let [loc, sku, qty] = require_args::<3>("INCREMENT", args)?;
            Ok(Command::Increment {
                location_id: LocationId::new(loc),
                sku_code: SkuCode::new(sku),
                amount: parse_quantity(&qty)?,
            })
        }
        "DECREMENT" => {
            let [loc, sku, qty] = require_args::<3>("DECREMENT", args)?;
            Ok(Command::Decrement {
                location_id: LocationId::new(loc),
                sku_code: SkuCode::new(sku),
                amount: parse_quantity(&qty)?,
            })
        }
        "OBSERVE" => {
            let [loc] = require_args::<1>("OBSERVE", args)?;
            Ok(Command::Observe {
                location_id: LocationId::new(loc),
            })
        }
        "TRANSFER" => {
            let [src, dst, sku, qty] = require_args::<4>("TRANSFER", args)?;
            Ok(Command::Transfer {
                source: LocationId::new(src),
                destination: LocationId::new(dst),
                sku_code: SkuCode::new(sku),
                quantity: parse_quantity(&qty)?,
            })
        }
        other => Err(CommandParseError::UnknownAction {
            action: other.to_string(),
            expected: "INCREMENT, DECREMENT, OBSERVE, or TRANSFER",
        }),
    }
}

fn require_args<const N: usize>(
    action: &'static str,
    args: &[&str],
) -> Result<[String; N], CommandParseError> {
    if args.len() != N {
        return Err(CommandParseError::WrongArgumentCount {
            action,
            expected: N,
        });
    }
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = (*arg).to_string();
    }
    Ok(out)
}

fn parse_quantity(word: &str) -> Result<i64, CommandParseError> {
    word.parse()
        .map_err(|_| CommandParseError::InvalidQuantity(word.to_string()))
}
