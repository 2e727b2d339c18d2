use std::result::Result as StdResult;

use thiserror::Error;

/// Reasons an account refuses a deposit or withdrawal.
///
/// A rejection is an ordinary value: the account it came from is left
/// untouched and callers decide how to surface it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    #[error("amount must be positive, got {amount}")]
    InvalidAmount { amount: f64 },
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("overdraft limit exceeded: requested {requested}, available {available}")]
    OverdraftLimitExceeded { requested: f64, available: f64 },
}

/// Error type for the configuration and command-line layers.
#[derive(Error, Debug)]
pub enum BankError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = StdResult<T, BankError>;

impl BankError {
    /// Process exit code used by the demo binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            BankError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        BankError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        BankError::Serialization(err.to_string())
    }
}
