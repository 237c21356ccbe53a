//! # Account State View

use serde::{Deserialize, Serialize};
use vela_core::effects::AccountSnapshot;

use super::FetchStatus;

/// Account and delegation state of the active wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Fetch progress and sticky error
    pub status: FetchStatus,
    /// Whether the account has an active delegation
    pub is_delegating: bool,
    /// Total amount delegated, in base units
    pub total_delegated: u64,
    /// Accumulated reward balance, in base units
    pub reward_balance: u64,
    /// Pool the account delegates to, if any
    pub pool_operator: Option<String>,
}

impl AccountState {
    /// Apply a fresh snapshot from the backend
    pub fn apply(&mut self, snapshot: AccountSnapshot) {
        self.is_delegating = snapshot.is_delegating;
        self.total_delegated = snapshot.total_delegated;
        self.reward_balance = snapshot.reward_balance;
        self.pool_operator = snapshot.pool_operator;
        self.status.succeed();
    }
}
