use std::io;

use thiserror::Error;

/// Error type that captures ledger and budget failures.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
    #[error("Category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("Cannot transfer from `{0}` to itself")]
    SelfTransfer(String),
}

/// Error type raised while loading, validating, or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
