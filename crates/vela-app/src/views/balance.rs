//! # Balance View

use serde::{Deserialize, Serialize};
use vela_core::effects::BalanceSnapshot;

use super::FetchStatus;

/// Spendable balance of the active wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceState {
    /// Fetch progress and sticky error
    pub status: FetchStatus,
    /// Sum of unspent outputs, in base units
    pub utxo_total: u64,
}

impl BalanceState {
    /// Apply a fresh snapshot from the backend
    pub fn apply(&mut self, snapshot: BalanceSnapshot) {
        self.utxo_total = snapshot.utxo_total;
        self.status.succeed();
    }
}
