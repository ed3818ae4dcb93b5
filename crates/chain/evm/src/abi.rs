//! Raffle contract interface description.
//!
//! The ABI ships as a versioned JSON schema file embedded at compile time.
//! Two entry points are exercised by this client: one payable state-mutating
//! call and one parameterless view returning an address.

use ethers::core::abi::Abi;

use crate::error::{EvmError, Result};

/// Raw ABI schema for the deployed raffle contract.
pub const RAFFLE_ABI_JSON: &str = include_str!("../abi/raffle.json");

/// Payable entry point joining the raffle. Fixed fee attached, no arguments.
pub const ENTER_RAFFLE: &str = "enterRaffle";

/// Read-only entry point holding the most recent winner address.
pub const RECENT_WINNER: &str = "s_recentWinner";

/// Parse the embedded ABI schema.
pub fn raffle_abi() -> Result<Abi> {
    serde_json::from_str(RAFFLE_ABI_JSON).map_err(|e| EvmError::Abi(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_abi_parses() {
        let abi = raffle_abi().unwrap();
        assert!(abi.function(ENTER_RAFFLE).is_ok());
        assert!(abi.function(RECENT_WINNER).is_ok());
    }

    #[test]
    fn entry_point_mutability() {
        let abi = raffle_abi().unwrap();
        let enter = abi.function(ENTER_RAFFLE).unwrap();
        assert!(enter.inputs.is_empty());
        let winner = abi.function(RECENT_WINNER).unwrap();
        assert!(winner.inputs.is_empty());
        assert_eq!(winner.outputs.len(), 1);
    }
}
