//! Mock raffle chain for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{
    ConnectionProbe, ContractTransport, EntryError, RaffleChain, RaffleEntry, ReadError,
    TransportError, WinnerReader,
};
use crate::types::{Address, EntryReceipt, TransactionStatus, TxHash, Wei, ENTRY_FEE};

/// Mock raffle chain for testing without a wallet or network.
///
/// Simulates contract calls in-memory and records every submission so tests
/// can assert exact call counts and carried values.
#[derive(Clone)]
pub struct MockRaffleChain {
    connected: Arc<AtomicBool>,
    winner: Arc<Mutex<Address>>,
    entries: Arc<Mutex<Vec<Wei>>>,
    winner_reads: Arc<AtomicUsize>,
    fail_reads: Arc<AtomicBool>,
    fail_entries: Arc<AtomicBool>,
    tx_counter: Arc<AtomicUsize>,
}

impl MockRaffleChain {
    pub fn new() -> Self {
        Self {
            connected: Arc::new(AtomicBool::new(false)),
            winner: Arc::new(Mutex::new(Address::ZERO)),
            entries: Arc::new(Mutex::new(Vec::new())),
            winner_reads: Arc::new(AtomicUsize::new(0)),
            fail_reads: Arc::new(AtomicBool::new(false)),
            fail_entries: Arc::new(AtomicBool::new(false)),
            tx_counter: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the winner stored in the mock contract slot.
    pub fn set_winner(&self, winner: Address) {
        *self.winner.lock().unwrap() = winner;
    }

    /// Set connection availability observed by the probe.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Make subsequent winner reads fail with a transport error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent entries fail as contract reverts.
    pub fn fail_entries(&self, fail: bool) {
        self.fail_entries.store(fail, Ordering::SeqCst);
    }

    /// Values carried by every submitted entry, in submission order.
    pub fn submitted_entries(&self) -> Vec<Wei> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of winner reads issued so far.
    pub fn winner_read_count(&self) -> usize {
        self.winner_reads.load(Ordering::SeqCst)
    }

    fn next_tx_hash(&self) -> TxHash {
        let n = self.tx_counter.fetch_add(1, Ordering::SeqCst) as u64 + 1;
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&n.to_le_bytes());
        TxHash::from_bytes(bytes)
    }
}

impl Default for MockRaffleChain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContractTransport for MockRaffleChain {
    async fn call_payable(&self, entry_point: &str, value: Wei) -> Result<TxHash, TransportError> {
        if entry_point != "enterRaffle" {
            return Err(TransportError::UnknownEntryPoint(entry_point.to_string()));
        }
        if self.fail_entries.load(Ordering::SeqCst) {
            return Err(TransportError::TransactionFailed("reverted".to_string()));
        }
        self.entries.lock().unwrap().push(value);
        tracing::debug!(%value, "mock entry recorded");
        Ok(self.next_tx_hash())
    }

    async fn call_view(&self, entry_point: &str) -> Result<Address, TransportError> {
        if entry_point != "s_recentWinner" {
            return Err(TransportError::UnknownEntryPoint(entry_point.to_string()));
        }
        self.winner_reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(TransportError::Network("read failed".to_string()));
        }
        Ok(*self.winner.lock().unwrap())
    }

    async fn health_check(&self) -> Result<(), TransportError> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(TransportError::Network("not connected".to_string()))
        }
    }
}

#[async_trait]
impl RaffleEntry for MockRaffleChain {
    async fn enter_raffle(&self) -> Result<EntryReceipt, EntryError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(EntryError::ProviderUnavailable);
        }
        if self.fail_entries.load(Ordering::SeqCst) {
            return Err(EntryError::Reverted("raffle closed".to_string()));
        }
        let tx_hash = self.call_payable("enterRaffle", ENTRY_FEE).await?;
        Ok(EntryReceipt {
            tx_hash,
            value: ENTRY_FEE,
            status: TransactionStatus::Confirmed { block_height: 1 },
        })
    }
}

#[async_trait]
impl WinnerReader for MockRaffleChain {
    async fn recent_winner(&self) -> Result<Address, ReadError> {
        let winner = self.call_view("s_recentWinner").await?;
        Ok(winner)
    }
}

#[async_trait]
impl ConnectionProbe for MockRaffleChain {
    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

impl RaffleChain for MockRaffleChain {
    fn name(&self) -> &str {
        "Mock"
    }

    fn network(&self) -> &str {
        "mock-network"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_raffle_chain() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);

        // Entry records the fixed fee
        let receipt = chain.enter_raffle().await.unwrap();
        assert_eq!(receipt.value, ENTRY_FEE);
        assert_eq!(chain.submitted_entries(), vec![ENTRY_FEE]);

        // Winner read returns the stored value
        let winner: Address = "0x000000000000000000000000000000000000abcd".parse().unwrap();
        chain.set_winner(winner);
        assert_eq!(chain.recent_winner().await.unwrap(), winner);
        assert_eq!(chain.winner_read_count(), 1);

        // Disconnected entries are refused
        chain.set_connected(false);
        assert!(matches!(
            chain.enter_raffle().await,
            Err(EntryError::ProviderUnavailable)
        ));

        // Failure injection
        chain.set_connected(true);
        chain.fail_reads(true);
        assert!(chain.recent_winner().await.is_err());
        chain.fail_entries(true);
        assert!(matches!(
            chain.enter_raffle().await,
            Err(EntryError::Reverted(_))
        ));

        // RaffleChain trait
        assert_eq!(chain.name(), "Mock");
        assert_eq!(chain.network(), "mock-network");
    }

    #[tokio::test]
    async fn test_unknown_entry_point_is_refused() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);
        assert!(matches!(
            chain.call_payable("withdraw", ENTRY_FEE).await,
            Err(TransportError::UnknownEntryPoint(_))
        ));
        assert!(matches!(
            chain.call_view("s_owner").await,
            Err(TransportError::UnknownEntryPoint(_))
        ));
    }
}
