//! Deployment profile for the external deployment tool.
//!
//! Mirrors the network entry the contract was deployed with: one named
//! network, env-sourced endpoint and signing credential, and a pinned
//! compiler version. The client never consumes this at runtime; it is
//! serialized for the deployment tooling.

use std::env;

use serde::{Deserialize, Serialize};

use crate::config::EvmNetwork;
use crate::error::{EvmError, Result};

/// Compiler version the raffle contract was built with.
pub const SOLC_VERSION: &str = "0.8.7";

/// One named network entry for contract deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentProfile {
    /// Network name (e.g., "rinkeby", "local")
    pub network: String,

    /// RPC endpoint URL, sourced from the process environment
    pub rpc_url: Option<String>,

    /// Signing credential, sourced from the process environment
    pub private_key: Option<String>,

    /// Numeric chain identifier
    pub chain_id: u64,

    /// Whether deployment records are persisted
    pub save_deployments: bool,

    /// Default named deployer account index
    pub deployer_account_index: u32,

    /// Fixed compiler version string
    pub solc_version: String,
}

impl DeploymentProfile {
    /// Profile for the Rinkeby test network the contract is deployed on.
    pub fn rinkeby() -> Self {
        Self::for_network(EvmNetwork::Rinkeby)
    }

    /// Profile for a named network with its canonical chain id.
    pub fn for_network(network: EvmNetwork) -> Self {
        Self {
            network: network.as_str().to_string(),
            rpc_url: None,
            private_key: None,
            chain_id: network.chain_id(),
            save_deployments: true,
            deployer_account_index: 0,
            solc_version: SOLC_VERSION.to_string(),
        }
    }

    /// Load the deployment profile from environment variables.
    ///
    /// Environment variables:
    /// - `RINKEBY_RPC_URL` - RPC endpoint URL (required)
    /// - `PRIVATE_KEY` - Signing credential (required)
    pub fn from_env() -> Result<Self> {
        let rpc_url = env::var("RINKEBY_RPC_URL")
            .map_err(|_| EvmError::InvalidConfig("RINKEBY_RPC_URL is not set".to_string()))?;
        let private_key = env::var("PRIVATE_KEY")
            .map_err(|_| EvmError::InvalidConfig("PRIVATE_KEY is not set".to_string()))?;

        let mut profile = Self::rinkeby();
        profile.rpc_url = Some(rpc_url);
        profile.private_key = Some(private_key);
        Ok(profile)
    }

    /// Serialize the profile for the deployment tool.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| EvmError::Abi(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rinkeby_profile_defaults() {
        let profile = DeploymentProfile::rinkeby();
        assert_eq!(profile.network, "rinkeby");
        assert_eq!(profile.chain_id, 4);
        assert!(profile.save_deployments);
        assert_eq!(profile.deployer_account_index, 0);
        assert_eq!(profile.solc_version, "0.8.7");
    }

    #[test]
    fn profile_serializes_for_deploy_tool() {
        let mut profile = DeploymentProfile::rinkeby();
        profile.rpc_url = Some("https://rinkeby.example".to_string());
        let json = profile.to_json().unwrap();
        assert!(json.contains("\"network\": \"rinkeby\""));
        assert!(json.contains("\"chain_id\": 4"));
        assert!(json.contains("\"save_deployments\": true"));
    }
}
