//! Blockchain abstraction layer for the raffle client.
//!
//! This crate provides a layered chain abstraction for the raffle client.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: RaffleChain (composite trait)
//!          ├── RaffleEntry
//!          ├── WinnerReader
//!          └── ConnectionProbe
//!
//! Layer 1: Domain Traits (raffle concepts)
//!
//! Layer 0: ContractTransport (pure infrastructure)
//! ```
//!
//! # Design Philosophy
//!
//! - **Layer 0 (Transport)**: Pure contract-call operations, no raffle knowledge
//! - **Layer 1 (Domain)**: Raffle-specific traits (entry, winner read, connection)
//! - **Layer 2 (Composite)**: Complete client interface combining all capabilities
//!
//! # Usage
//!
//! ```ignore
//! use raffle_chain_core::RaffleChain;
//!
//! async fn play(chain: &dyn RaffleChain) {
//!     let receipt = chain.enter_raffle().await?;
//!     let winner = chain.recent_winner().await?;
//! }
//! ```

pub mod mock;
pub mod traits;
pub mod types;

// Re-export all traits
pub use traits::{
    ConnectionProbe, ContractTransport, EntryError, RaffleChain, RaffleEntry, ReadError,
    TransportError, WinnerReader,
};

// Re-export all types
pub use types::{Address, EntryReceipt, TransactionStatus, TxHash, Wei, ENTRY_FEE};

pub use mock::MockRaffleChain;
