//! EVM raffle client implementation.

use std::sync::Arc;

use async_trait::async_trait;
use ethers::contract::{Contract, ContractError};
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address as EthAddress, H256};

use raffle_chain_core::{
    Address, ConnectionProbe, ContractTransport, EntryError, EntryReceipt, RaffleChain,
    RaffleEntry, ReadError, TransactionStatus, TransportError, TxHash, Wei, WinnerReader,
};

use crate::abi::{raffle_abi, ENTER_RAFFLE, RECENT_WINNER};
use crate::config::EvmConfig;
use crate::convert;
use crate::error::{EvmError, Result};

type RaffleMiddleware = SignerMiddleware<Provider<Http>, LocalWallet>;

/// EVM raffle client.
///
/// Binds the chain-core capability traits to the deployed raffle contract
/// over a JSON-RPC provider and a local signer.
pub struct EvmRaffleClient {
    config: EvmConfig,
    middleware: Arc<RaffleMiddleware>,
    contract: Contract<RaffleMiddleware>,
}

impl EvmRaffleClient {
    /// Create a new EVM raffle client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the RPC URL does
    /// not parse, or the signing key is malformed. No network traffic is
    /// issued during construction.
    pub fn new(config: EvmConfig) -> Result<Self> {
        config.validate().map_err(EvmError::InvalidConfig)?;

        let provider = Provider::<Http>::try_from(config.get_rpc_url())
            .map_err(|e| EvmError::InvalidConfig(format!("Invalid RPC URL: {}", e)))?;

        let key = config
            .private_key
            .as_deref()
            .ok_or_else(|| EvmError::InvalidConfig("PRIVATE_KEY is not set".to_string()))?;
        let wallet = key
            .parse::<LocalWallet>()
            .map_err(|e| EvmError::InvalidConfig(format!("Invalid signing key: {}", e)))?
            .with_chain_id(config.network.chain_id());

        let middleware = Arc::new(SignerMiddleware::new(provider, wallet));

        let address = config
            .contract_address
            .parse::<Address>()
            .map_err(|e| EvmError::InvalidAddress(e.to_string()))?;
        let contract = Contract::new(
            convert::to_eth_address(&address),
            raffle_abi()?,
            Arc::clone(&middleware),
        );

        Ok(Self {
            config,
            middleware,
            contract,
        })
    }
}

fn map_send_error(error: ContractError<RaffleMiddleware>) -> TransportError {
    match error {
        ContractError::Revert(data) => {
            TransportError::TransactionFailed(format!("reverted: 0x{}", hex::encode(&data)))
        }
        other => TransportError::Network(other.to_string()),
    }
}

#[async_trait]
impl ContractTransport for EvmRaffleClient {
    async fn call_payable(&self, entry_point: &str, value: Wei) -> Result<TxHash, TransportError> {
        let call = self
            .contract
            .method::<_, ()>(entry_point, ())
            .map_err(|_| TransportError::UnknownEntryPoint(entry_point.to_string()))?
            .value(convert::to_wei_u256(value));

        let pending = call.send().await.map_err(map_send_error)?;
        let submitted: H256 = *pending;
        tracing::debug!(entry_point, tx = %submitted, "transaction submitted");

        let receipt = pending
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?
            .ok_or_else(|| {
                TransportError::TransactionFailed("transaction dropped from mempool".to_string())
            })?;

        Ok(convert::from_tx_hash(receipt.transaction_hash))
    }

    async fn call_view(&self, entry_point: &str) -> Result<Address, TransportError> {
        let value: EthAddress = self
            .contract
            .method::<_, EthAddress>(entry_point, ())
            .map_err(|_| TransportError::UnknownEntryPoint(entry_point.to_string()))?
            .call()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(convert::from_eth_address(value))
    }

    async fn health_check(&self) -> Result<(), TransportError> {
        self.middleware
            .get_chainid()
            .await
            .map(|_| ())
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}

#[async_trait]
impl RaffleEntry for EvmRaffleClient {
    async fn enter_raffle(&self) -> Result<EntryReceipt, EntryError> {
        let call = self
            .contract
            .method::<_, ()>(ENTER_RAFFLE, ())
            .map_err(|_| TransportError::UnknownEntryPoint(ENTER_RAFFLE.to_string()))
            .map_err(EntryError::Transport)?
            .value(convert::to_wei_u256(self.config.entry_fee));

        let pending = call.send().await.map_err(|e| match e {
            ContractError::Revert(data) => {
                EntryError::Reverted(format!("0x{}", hex::encode(&data)))
            }
            other => EntryError::Transport(TransportError::Network(other.to_string())),
        })?;
        let submitted: H256 = *pending;
        tracing::info!(tx = %submitted, fee = %self.config.entry_fee, "raffle entry submitted");

        let receipt = pending
            .await
            .map_err(|e| EntryError::Transport(TransportError::Network(e.to_string())))?
            .ok_or_else(|| {
                EntryError::Transport(TransportError::TransactionFailed(
                    "transaction dropped from mempool".to_string(),
                ))
            })?;

        if receipt.status.map(|s| s.as_u64()) == Some(0) {
            return Err(EntryError::Reverted("entry transaction reverted".to_string()));
        }

        Ok(EntryReceipt {
            tx_hash: convert::from_tx_hash(receipt.transaction_hash),
            value: self.config.entry_fee,
            status: TransactionStatus::Confirmed {
                block_height: receipt.block_number.map(|n| n.as_u64()).unwrap_or(0),
            },
        })
    }
}

#[async_trait]
impl WinnerReader for EvmRaffleClient {
    async fn recent_winner(&self) -> Result<Address, ReadError> {
        Ok(self.call_view(RECENT_WINNER).await?)
    }
}

#[async_trait]
impl ConnectionProbe for EvmRaffleClient {
    async fn is_connected(&self) -> bool {
        self.health_check().await.is_ok()
    }
}

impl RaffleChain for EvmRaffleClient {
    fn name(&self) -> &str {
        "Evm"
    }

    fn network(&self) -> &str {
        self.config.network.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvmNetwork;

    fn local_config() -> EvmConfig {
        EvmConfig::new(EvmNetwork::Local).with_private_key(format!("{:064x}", 1))
    }

    #[test]
    fn construction_needs_no_network() {
        let client = EvmRaffleClient::new(local_config()).unwrap();
        assert_eq!(client.name(), "Evm");
        assert_eq!(client.network(), "local");
    }

    #[test]
    fn construction_rejects_missing_key() {
        let config = EvmConfig::new(EvmNetwork::Local);
        assert!(matches!(
            EvmRaffleClient::new(config),
            Err(EvmError::InvalidConfig(_))
        ));
    }
}
