//! EVM network configuration.

use std::env;

use raffle_chain_core::{Wei, ENTRY_FEE};

/// Address of the deployed raffle contract.
pub const CONTRACT_ADDRESS: &str = "0xF6814D35bf6Cb498C3982230F8613c270555D074";

/// EVM network types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvmNetwork {
    /// Rinkeby test network
    Rinkeby,
    /// Local development node
    Local,
}

impl EvmNetwork {
    pub fn default_rpc_url(&self) -> &str {
        match self {
            EvmNetwork::Rinkeby => "https://rinkeby.infura.io/v3",
            EvmNetwork::Local => "http://127.0.0.1:8545",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            EvmNetwork::Rinkeby => 4,
            EvmNetwork::Local => 31337,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EvmNetwork::Rinkeby => "rinkeby",
            EvmNetwork::Local => "local",
        }
    }
}

/// EVM-specific configuration.
pub struct EvmConfig {
    /// Network to connect to
    pub network: EvmNetwork,

    /// Custom RPC endpoint URL (overrides network default)
    pub rpc_url: Option<String>,

    /// Hex-encoded signing key for the entry transaction
    pub private_key: Option<String>,

    /// Deployed raffle contract address
    pub contract_address: String,

    /// Value attached to every entry transaction
    pub entry_fee: Wei,
}

impl EvmConfig {
    /// Create a new EVM configuration with the deployed contract defaults.
    pub fn new(network: EvmNetwork) -> Self {
        Self {
            network,
            rpc_url: None,
            private_key: None,
            contract_address: CONTRACT_ADDRESS.to_string(),
            entry_fee: ENTRY_FEE,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RAFFLE_NETWORK` - Network name (rinkeby, local) (default: rinkeby)
    /// - `RINKEBY_RPC_URL` / `EVM_RPC_URL` - RPC endpoint URL
    /// - `PRIVATE_KEY` - Hex-encoded signing key
    /// - `RAFFLE_CONTRACT_ADDRESS` - Contract address override
    /// - `RAFFLE_ENTRY_FEE_WEI` - Entry fee override in wei
    pub fn from_env() -> Result<Self, String> {
        let network = parse_network(env::var("RAFFLE_NETWORK").ok())?;

        let rpc_url = env::var("RINKEBY_RPC_URL")
            .or_else(|_| env::var("EVM_RPC_URL"))
            .ok();
        let private_key = env::var("PRIVATE_KEY").ok();
        let contract_address = env::var("RAFFLE_CONTRACT_ADDRESS")
            .unwrap_or_else(|_| CONTRACT_ADDRESS.to_string());
        let entry_fee = parse_entry_fee(env::var("RAFFLE_ENTRY_FEE_WEI").ok())?;

        Ok(Self {
            network,
            rpc_url,
            private_key,
            contract_address,
            entry_fee,
        })
    }

    /// Set custom RPC URL.
    pub fn with_rpc_url(mut self, url: String) -> Self {
        self.rpc_url = Some(url);
        self
    }

    /// Set the signing key.
    pub fn with_private_key(mut self, key: String) -> Self {
        self.private_key = Some(key);
        self
    }

    /// Set the contract address.
    pub fn with_contract_address(mut self, address: String) -> Self {
        self.contract_address = address;
        self
    }

    /// Get the RPC URL (custom or default for network).
    pub fn get_rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }

    /// Validate configuration before constructing a client.
    pub fn validate(&self) -> Result<(), String> {
        if self.private_key.as_deref().is_none_or(str::is_empty) {
            return Err("PRIVATE_KEY is not set".to_string());
        }
        if self
            .contract_address
            .parse::<raffle_chain_core::Address>()
            .is_err()
        {
            return Err(format!(
                "Invalid contract address: {}",
                self.contract_address
            ));
        }
        Ok(())
    }
}

fn parse_network(value: Option<String>) -> Result<EvmNetwork, String> {
    match value
        .unwrap_or_else(|| "rinkeby".to_string())
        .to_lowercase()
        .as_str()
    {
        "rinkeby" => Ok(EvmNetwork::Rinkeby),
        "local" => Ok(EvmNetwork::Local),
        other => Err(format!(
            "Invalid RAFFLE_NETWORK: {}. Must be rinkeby or local",
            other
        )),
    }
}

fn parse_entry_fee(value: Option<String>) -> Result<Wei, String> {
    match value {
        None => Ok(ENTRY_FEE),
        Some(raw) => raw
            .parse::<u128>()
            .map(Wei::new)
            .map_err(|_| format!("Invalid RAFFLE_ENTRY_FEE_WEI: {}", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_defaults() {
        assert_eq!(EvmNetwork::Rinkeby.chain_id(), 4);
        assert_eq!(EvmNetwork::Local.chain_id(), 31337);
        assert_eq!(EvmNetwork::Rinkeby.as_str(), "rinkeby");
    }

    #[test]
    fn parse_network_accepts_known_names() {
        assert_eq!(parse_network(None).unwrap(), EvmNetwork::Rinkeby);
        assert_eq!(
            parse_network(Some("LOCAL".to_string())).unwrap(),
            EvmNetwork::Local
        );
        assert!(parse_network(Some("mainnet".to_string())).is_err());
    }

    #[test]
    fn parse_entry_fee_defaults_to_fixed_fee() {
        assert_eq!(parse_entry_fee(None).unwrap(), ENTRY_FEE);
        assert_eq!(
            parse_entry_fee(Some("42".to_string())).unwrap(),
            Wei::new(42)
        );
        assert!(parse_entry_fee(Some("nope".to_string())).is_err());
    }

    #[test]
    fn validate_requires_signing_key() {
        let config = EvmConfig::new(EvmNetwork::Rinkeby);
        assert!(config.validate().is_err());

        let config = config.with_private_key("ab".repeat(32));
        assert!(config.validate().is_ok());

        let config = config.with_contract_address("0x1234".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn rpc_url_falls_back_to_network_default() {
        let config = EvmConfig::new(EvmNetwork::Local);
        assert_eq!(config.get_rpc_url(), "http://127.0.0.1:8545");
        let config = config.with_rpc_url("http://10.0.0.1:8545".to_string());
        assert_eq!(config.get_rpc_url(), "http://10.0.0.1:8545");
    }
}
