//! # View Sub-States
//!
//! The per-concern sub-states of the session: the loaded wallet, account
//! and delegation state, transaction history, spendable balance, and the
//! voting fund window. These types are plain serializable data so UI shells
//! can consume snapshots directly.

mod account;
mod balance;
mod funds;
mod history;
mod wallet;

pub use account::AccountState;
pub use balance::BalanceState;
pub use funds::FundInfoState;
pub use history::TxHistoryState;
pub use wallet::ActiveWallet;

use serde::{Deserialize, Serialize};

/// Pending/error pair carried by every network-backed sub-state
///
/// Errors are sticky: a failed fetch leaves `last_error` set until a later
/// fetch succeeds, so the UI can keep rendering cached data with an error
/// banner on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchStatus {
    /// Whether a fetch is currently in flight
    pub is_fetching: bool,
    /// Error from the most recent failed fetch
    pub last_error: Option<String>,
}

impl FetchStatus {
    /// Record that a fetch started
    pub fn begin(&mut self) {
        self.is_fetching = true;
    }

    /// Record a successful fetch
    pub fn succeed(&mut self) {
        self.is_fetching = false;
        self.last_error = None;
    }

    /// Record a failed fetch; the error sticks until the next success
    pub fn fail(&mut self, error: impl Into<String>) {
        self.is_fetching = false;
        self.last_error = Some(error.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_sticky_across_begin() {
        let mut status = FetchStatus::default();
        status.begin();
        status.fail("timeout");
        assert_eq!(status.last_error.as_deref(), Some("timeout"));

        // A retry keeps the previous error visible while in flight.
        status.begin();
        assert!(status.is_fetching);
        assert_eq!(status.last_error.as_deref(), Some("timeout"));

        status.succeed();
        assert_eq!(status.last_error, None);
    }
}
