//! EVM binding for the raffle chain abstraction.
//!
//! Implements the `raffle-chain-core` traits over an ethers JSON-RPC
//! provider and local signer: a payable `enterRaffle` call carrying the
//! fixed fee, and a view read of the `s_recentWinner` slot. Configuration
//! and the deployment profile are sourced from environment variables.

pub mod abi;
pub mod client;
pub mod config;
pub mod convert;
pub mod deployment;
pub mod error;

pub use abi::{raffle_abi, ENTER_RAFFLE, RECENT_WINNER};
pub use client::EvmRaffleClient;
pub use config::{EvmConfig, EvmNetwork, CONTRACT_ADDRESS};
pub use deployment::DeploymentProfile;
pub use error::{EvmError, Result};
