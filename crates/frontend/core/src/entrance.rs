//! Entry widget view model.
//!
//! Owns the two display strings of the entrance widget and the
//! connection-driven synchronization that keeps the winner display current.
//! All chain access goes through injected capabilities; failures are
//! returned to the caller instead of propagating silently.

use raffle_chain_core::{EntryError, EntryReceipt, RaffleEntry, ReadError, WinnerReader};

/// Sentinel winner display meaning "unknown/unfetched".
pub const WINNER_UNKNOWN: &str = "0";

/// View model for the raffle entrance widget.
///
/// Display state is mutated only by the synchronization effect and explicit
/// refreshes; entry settlement never writes it.
#[derive(Clone, Debug)]
pub struct EntranceView {
    recent_winner: String,
    num_players: String,
    connected: bool,
}

impl EntranceView {
    pub fn new() -> Self {
        Self {
            recent_winner: WINNER_UNKNOWN.to_string(),
            num_players: "0".to_string(),
            connected: false,
        }
    }

    pub fn recent_winner(&self) -> &str {
        &self.recent_winner
    }

    /// Player count display. Declared display state; no call updates it.
    pub fn num_players(&self) -> &str {
        &self.num_players
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The winner status line as rendered by the widget.
    pub fn winner_line(&self) -> String {
        format!("The Recent Winner is : {}", self.recent_winner)
    }

    /// Synchronization effect, driven by connection availability changes.
    ///
    /// Issues exactly one winner read when availability transitions from
    /// false to true. Repeated observations of the same availability do not
    /// re-read; nothing else re-runs the effect.
    pub async fn set_connected(
        &mut self,
        connected: bool,
        chain: &dyn WinnerReader,
    ) -> Result<(), ReadError> {
        let was_connected = self.connected;
        self.connected = connected;

        if connected && !was_connected {
            self.refresh_winner(chain).await
        } else {
            Ok(())
        }
    }

    /// Fetch the winner slot and update the display.
    ///
    /// On failure the display retains its previous value and the error is
    /// returned for the UI layer to log or show.
    pub async fn refresh_winner(&mut self, chain: &dyn WinnerReader) -> Result<(), ReadError> {
        match chain.recent_winner().await {
            Ok(winner) => {
                self.recent_winner = winner.to_string();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "winner read failed; keeping previous display");
                Err(e)
            }
        }
    }

    /// Submit one raffle entry carrying the fixed fee.
    ///
    /// No in-flight guard: rapid repeated calls are independent
    /// submissions. Settlement does not touch display state; callers that
    /// want a fresh winner re-fetch explicitly.
    pub async fn enter(&self, chain: &dyn RaffleEntry) -> Result<EntryReceipt, EntryError> {
        chain.enter_raffle().await
    }
}

impl Default for EntranceView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raffle_chain_core::{Address, MockRaffleChain, ENTRY_FEE};

    fn winner_address() -> Address {
        "0xabcd000000000000000000000000000000001234".parse().unwrap()
    }

    #[test]
    fn initial_display_is_sentinel() {
        let view = EntranceView::new();
        assert_eq!(view.recent_winner(), WINNER_UNKNOWN);
        assert_eq!(view.num_players(), "0");
        assert_eq!(view.winner_line(), "The Recent Winner is : 0");
        assert!(!view.is_connected());
    }

    #[tokio::test]
    async fn connection_transition_reads_winner_once() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);
        chain.set_winner(winner_address());

        let mut view = EntranceView::new();
        view.set_connected(true, &chain).await.unwrap();
        assert_eq!(chain.winner_read_count(), 1);
        assert_eq!(view.recent_winner(), winner_address().to_string());

        // Repeated availability does not re-read
        view.set_connected(true, &chain).await.unwrap();
        assert_eq!(chain.winner_read_count(), 1);
    }

    #[tokio::test]
    async fn reconnection_reads_again() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);

        let mut view = EntranceView::new();
        view.set_connected(true, &chain).await.unwrap();
        view.set_connected(false, &chain).await.unwrap();
        view.set_connected(true, &chain).await.unwrap();
        assert_eq!(chain.winner_read_count(), 2);
    }

    #[tokio::test]
    async fn failed_read_keeps_previous_display() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);
        chain.set_winner(winner_address());

        let mut view = EntranceView::new();
        view.set_connected(true, &chain).await.unwrap();
        let shown = view.recent_winner().to_string();

        chain.fail_reads(true);
        assert!(view.refresh_winner(&chain).await.is_err());
        assert_eq!(view.recent_winner(), shown);
    }

    #[tokio::test]
    async fn failed_initial_read_keeps_sentinel() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);
        chain.fail_reads(true);

        let mut view = EntranceView::new();
        assert!(view.set_connected(true, &chain).await.is_err());
        assert_eq!(view.winner_line(), "The Recent Winner is : 0");
    }

    #[tokio::test]
    async fn enter_submits_one_transaction_with_fixed_fee() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);

        let view = EntranceView::new();
        let receipt = view.enter(&chain).await.unwrap();
        assert_eq!(receipt.value, ENTRY_FEE);
        assert_eq!(chain.submitted_entries(), vec![ENTRY_FEE]);
    }

    #[tokio::test]
    async fn rapid_entries_are_independent_submissions() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);

        let view = EntranceView::new();
        let (first, second) = tokio::join!(view.enter(&chain), view.enter(&chain));
        first.unwrap();
        second.unwrap();
        assert_eq!(chain.submitted_entries(), vec![ENTRY_FEE, ENTRY_FEE]);
    }

    #[tokio::test]
    async fn entry_settlement_does_not_touch_display() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);
        chain.set_winner(winner_address());

        let view = EntranceView::new();
        view.enter(&chain).await.unwrap();
        assert_eq!(view.recent_winner(), WINNER_UNKNOWN);
        assert_eq!(chain.winner_read_count(), 0);
    }

    #[tokio::test]
    async fn resolved_read_renders_address_line() {
        let chain = MockRaffleChain::new();
        chain.set_connected(true);
        chain.set_winner(winner_address());

        let mut view = EntranceView::new();
        view.set_connected(true, &chain).await.unwrap();
        assert_eq!(
            view.winner_line(),
            "The Recent Winner is : 0xabcd000000000000000000000000000000001234"
        );
    }

    #[tokio::test]
    async fn never_connected_keeps_sentinel_line() {
        let chain = MockRaffleChain::new();

        let mut view = EntranceView::new();
        view.set_connected(false, &chain).await.unwrap();
        view.set_connected(false, &chain).await.unwrap();
        assert_eq!(chain.winner_read_count(), 0);
        assert_eq!(view.winner_line(), "The Recent Winner is : 0");
    }
}
