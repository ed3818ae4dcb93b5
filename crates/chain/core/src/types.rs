//! Common types for contract interactions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed raffle entry fee attached to every entry transaction.
///
/// 100_000_000_000_000_000 wei = 0.1 ETH. The fee is fixed at binding time
/// and never parameterized by the caller.
pub const ENTRY_FEE: Wei = Wei(100_000_000_000_000_000);

/// 20-byte account/contract address.
///
/// Displayed and parsed as `0x`-prefixed lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|_| AddressParseError(s.to_string()))?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| AddressParseError(s.to_string()))?;
        Ok(Self(bytes))
    }
}

/// Error parsing a hex address string.
#[derive(Debug, thiserror::Error)]
#[error("Invalid address: {0}")]
pub struct AddressParseError(pub String);

/// 32-byte transaction hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHash(pub [u8; 32]);

impl TxHash {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Value amount in wei, the smallest native unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Wei(pub u128);

impl Wei {
    pub const fn new(amount: u128) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

/// Transaction status on the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Transaction is pending in the mempool
    Pending,

    /// Transaction is confirmed on-chain
    Confirmed { block_height: u64 },

    /// Transaction failed on-chain
    Failed { error: String },
}

/// Result of a settled raffle entry submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryReceipt {
    /// Transaction hash on the chain
    pub tx_hash: TxHash,

    /// Value carried by the entry transaction
    pub value: Wei,

    /// Settlement status
    pub status: TransactionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_display_roundtrip() {
        let addr: Address = "0xF6814D35bf6Cb498C3982230F8613c270555D074"
            .parse()
            .unwrap();
        assert_eq!(addr.to_string(), "0xf6814d35bf6cb498c3982230f8613c270555d074");
        let reparsed: Address = addr.to_string().parse().unwrap();
        assert_eq!(addr, reparsed);
    }

    #[test]
    fn address_rejects_wrong_length() {
        assert!("0xabcd".parse::<Address>().is_err());
        assert!("not hex".parse::<Address>().is_err());
    }

    #[test]
    fn entry_fee_is_one_tenth_eth() {
        assert_eq!(ENTRY_FEE.amount(), 100_000_000_000_000_000);
    }
}
