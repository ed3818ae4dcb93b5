//! Chain abstraction traits.
//!
//! This module defines a layered chain abstraction:
//! - Layer 0: ContractTransport (pure infrastructure)
//! - Layer 1: RaffleEntry, WinnerReader, ConnectionProbe (raffle domain)
//! - Layer 2: RaffleChain (composite trait)

use async_trait::async_trait;

use crate::types::{Address, EntryReceipt, TxHash, Wei};

// ============================================================================
// Error Types
// ============================================================================

/// Transport layer errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Unknown contract entry point: {0}")]
    UnknownEntryPoint(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend-specific error: {0}")]
    Backend(String),
}

/// Raffle entry submission errors.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Signer/provider unavailable")]
    ProviderUnavailable,

    #[error("Transaction rejected by signer")]
    Rejected,

    #[error("Contract reverted: {0}")]
    Reverted(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Winner read errors.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Signer/provider unavailable")]
    ProviderUnavailable,

    #[error("Invalid value in winner slot: {0}")]
    InvalidValue(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

// ============================================================================
// Layer 0: Pure Infrastructure
// ============================================================================

/// Pure contract-call infrastructure layer.
///
/// This trait provides low-level contract operations without any raffle-specific
/// knowledge: a value-bearing call to a named entry point and a parameterless
/// read from a named entry point.
#[async_trait]
pub trait ContractTransport: Send + Sync {
    /// Submit a value-bearing transaction to a named contract entry point.
    async fn call_payable(&self, entry_point: &str, value: Wei) -> Result<TxHash, TransportError>;

    /// Read an address-shaped value from a named read-only entry point.
    async fn call_view(&self, entry_point: &str) -> Result<Address, TransportError>;

    /// Health check: verify connection to the chain.
    async fn health_check(&self) -> Result<(), TransportError>;
}

// ============================================================================
// Layer 1: Raffle Domain Traits
// ============================================================================

/// Raffle entry submission.
///
/// The entry fee is fixed at binding time; the call takes no arguments.
#[async_trait]
pub trait RaffleEntry: Send + Sync {
    /// Submit one value-bearing entry transaction and await its settlement.
    async fn enter_raffle(&self) -> Result<EntryReceipt, EntryError>;
}

/// Read-only view of the contract's most recent winner slot.
#[async_trait]
pub trait WinnerReader: Send + Sync {
    /// Read the most recent winner address. No side effects beyond the remote read.
    async fn recent_winner(&self) -> Result<Address, ReadError>;
}

/// Externally owned connection availability.
///
/// The client only reads this; wallet/provider state is owned by the binding
/// layer behind the trait.
#[async_trait]
pub trait ConnectionProbe: Send + Sync {
    /// Whether a signer/provider is currently reachable.
    async fn is_connected(&self) -> bool;
}

// ============================================================================
// Layer 2: Composite Trait
// ============================================================================

/// Complete raffle chain client interface.
///
/// All raffle-compatible chain bindings implement this trait.
pub trait RaffleChain: RaffleEntry + WinnerReader + ConnectionProbe + Send + Sync {
    /// Chain binding name (e.g., "Evm", "Mock").
    fn name(&self) -> &str;

    /// Network name (e.g., "rinkeby", "local").
    fn network(&self) -> &str;
}
