//! Conversions between ethers types and chain-core types.

use ethers::types::{Address as EthAddress, H256, U256};

use raffle_chain_core::{Address, TxHash, Wei};

pub fn to_eth_address(address: &Address) -> EthAddress {
    EthAddress::from(address.0)
}

pub fn from_eth_address(address: EthAddress) -> Address {
    Address::from_bytes(address.0)
}

pub fn from_tx_hash(hash: H256) -> TxHash {
    TxHash::from_bytes(hash.0)
}

pub fn to_wei_u256(value: Wei) -> U256 {
    U256::from(value.amount())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_roundtrip() {
        let address: Address = "0xf6814d35bf6cb498c3982230f8613c270555d074"
            .parse()
            .unwrap();
        let eth = to_eth_address(&address);
        assert_eq!(from_eth_address(eth), address);
    }

    #[test]
    fn wei_widens_to_u256() {
        assert_eq!(
            to_wei_u256(Wei::new(100_000_000_000_000_000)),
            U256::from(100_000_000_000_000_000u128)
        );
    }
}
