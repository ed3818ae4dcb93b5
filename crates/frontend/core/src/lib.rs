//! Cross-frontend primitives for presenting the raffle.
//!
//! Houses the entry widget's view model so that terminal and future
//! graphical clients can reuse it. The view model talks to the chain only
//! through injected `raffle-chain-core` capabilities, keeping it testable
//! without a wallet.

pub mod entrance;

pub use entrance::{EntranceView, WINNER_UNKNOWN};
