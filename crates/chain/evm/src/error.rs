//! Error types for EVM chain operations.

use thiserror::Error;

/// Errors that can occur while binding to the EVM network.
#[derive(Debug, Error)]
pub enum EvmError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T, E = EvmError> = std::result::Result<T, E>;
