//! # Transaction History Sync View

use serde::{Deserialize, Serialize};

/// Synchronization status of the transaction history
///
/// The transactions themselves live on [`super::ActiveWallet`]; this tracks
/// only the refresh lifecycle so the list can render cached entries under a
/// sync spinner or error banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHistoryState {
    /// Whether a history refresh is in flight
    pub is_synchronizing: bool,
    /// Error from the most recent failed refresh, sticky until success
    pub last_sync_error: Option<String>,
}

impl TxHistoryState {
    /// Record that a refresh started
    pub fn begin(&mut self) {
        self.is_synchronizing = true;
    }

    /// Record a successful refresh
    pub fn succeed(&mut self) {
        self.is_synchronizing = false;
        self.last_sync_error = None;
    }

    /// Record a failed refresh
    pub fn fail(&mut self, error: impl Into<String>) {
        self.is_synchronizing = false;
        self.last_sync_error = Some(error.into());
    }
}
