//! Event loop pumping connection probes, user input, and entry outcomes.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use raffle_chain_core::{EntryError, EntryReceipt, RaffleChain};
use raffle_frontend_core::EntranceView;
use tokio::{sync::mpsc, time};

use crate::config::CliConfig;
use crate::messages::MessageLog;
use crate::terminal::Tui;
use crate::ui;

const FRAME_INTERVAL_MS: u64 = 50;

type EntryOutcome = Result<EntryReceipt, EntryError>;

/// Terminal application owning the entrance view and message log.
///
/// Three concerns meet in `run`:
/// - a probe interval observing connection availability and driving the
///   view's synchronization effect;
/// - a frame tick polling keyboard input;
/// - an mpsc channel returning outcomes of spawned entry submissions.
///
/// Entry submissions are spawned per keypress with no in-flight guard;
/// pressing twice before the first settles submits twice.
pub struct App<C>
where
    C: RaffleChain + 'static,
{
    chain: Arc<C>,
    view: EntranceView,
    messages: MessageLog,
    config: CliConfig,
    pending_entries: usize,
}

impl<C> App<C>
where
    C: RaffleChain + 'static,
{
    pub fn new(chain: Arc<C>, config: CliConfig) -> Self {
        let messages = MessageLog::new(config.message_capacity);
        Self {
            chain,
            view: EntranceView::new(),
            messages,
            config,
            pending_entries: 0,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let (tx_outcome, mut rx_outcome) = mpsc::channel::<EntryOutcome>(self.config.entry_buffer);

        let mut probe = time::interval(Duration::from_millis(self.config.probe_interval_ms));
        probe.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        self.render(terminal)?;

        loop {
            tokio::select! {
                _ = probe.tick() => {
                    self.handle_probe_tick().await;
                    self.render(terminal)?;
                }
                Some(outcome) = rx_outcome.recv() => {
                    self.handle_entry_outcome(outcome).await;
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(&tx_outcome)? {
                        break;
                    }
                    self.render(terminal)?;
                }
            }
        }

        Ok(())
    }

    /// Observe connection availability and let the view synchronize.
    async fn handle_probe_tick(&mut self) {
        let connected = self.chain.is_connected().await;
        if let Err(e) = self.view.set_connected(connected, &*self.chain).await {
            self.messages.push(format!("Winner read failed: {}", e));
        }
    }

    /// Apply a settled entry outcome, then re-fetch the winner on success.
    async fn handle_entry_outcome(&mut self, outcome: EntryOutcome) {
        self.pending_entries = self.pending_entries.saturating_sub(1);
        match outcome {
            Ok(receipt) => {
                self.messages
                    .push(format!("Entered raffle: {}", receipt.tx_hash));
                if let Err(e) = self.view.refresh_winner(&*self.chain).await {
                    self.messages.push(format!("Winner read failed: {}", e));
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "raffle entry failed");
                self.messages.push(format!("Entry failed: {}", e));
            }
        }
    }

    /// Drain pending keyboard events. Returns true when the user quits.
    fn handle_input_tick(&mut self, tx_outcome: &mpsc::Sender<EntryOutcome>) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter | KeyCode::Char('e') => self.submit_entry(tx_outcome),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                    _ => {}
                }
            }
        }
        Ok(false)
    }

    /// Spawn one entry submission. Deliberately unguarded.
    fn submit_entry(&mut self, tx_outcome: &mpsc::Sender<EntryOutcome>) {
        self.pending_entries += 1;
        self.messages.push("Submitting raffle entry...".to_string());

        let chain = Arc::clone(&self.chain);
        let view = self.view.clone();
        let tx = tx_outcome.clone();
        tokio::spawn(async move {
            let outcome = view.enter(&*chain).await;
            let _ = tx.send(outcome).await;
        });
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view: &self.view,
            messages: &self.messages,
            network: self.chain.network(),
            pending_entries: self.pending_entries,
        };
        ui::render(terminal, &ctx)
    }
}
