//! Chain Backend Effects Trait Definitions
//!
//! Remote fetchers the sync orchestrator drives: account/delegation state,
//! transaction history, spendable balance, the governance voting fund
//! window, and server health. All calls are read-only; the session core
//! owns no wire protocol.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::VelaError;
use crate::identifiers::{TxId, WalletId};

/// Chain backend operation error
pub type BackendError = VelaError;

/// Account and delegation state for one wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Accumulated reward balance, in base units
    pub reward_balance: u64,
    /// Total amount currently delegated, in base units
    pub total_delegated: u64,
    /// Whether the account has an active delegation
    pub is_delegating: bool,
    /// Pool the account delegates to, if any
    pub pool_operator: Option<String>,
}

/// Spendable balance summary for one wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Sum of unspent outputs, in base units
    pub utxo_total: u64,
}

/// Direction of a transaction relative to the wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxDirection {
    /// Funds received
    Received,
    /// Funds sent
    Sent,
    /// Internal movement between own addresses
    SelfTransfer,
}

/// One transaction as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    /// Transaction identifier
    pub id: TxId,
    /// Direction relative to the wallet
    pub direction: TxDirection,
    /// Net amount in base units
    pub amount: u64,
    /// Submission time
    pub submitted_at: DateTime<Utc>,
    /// Confirmation depth at fetch time
    pub confirmations: u32,
}

/// Governance voting fund registration window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundInfo {
    /// When registration opens
    pub registration_start: DateTime<Utc>,
    /// When registration closes
    pub registration_end: DateTime<Utc>,
}

impl FundInfo {
    /// Whether registration is open at the given instant
    pub fn is_registration_open(&self, now: DateTime<Utc>) -> bool {
        self.registration_start <= now && now < self.registration_end
    }
}

/// Server health as reported by the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Whether the server considers itself healthy
    pub is_server_ok: bool,
    /// Whether the server is in maintenance mode
    pub is_maintenance: bool,
    /// Server clock, for drift display
    pub server_time: Option<DateTime<Utc>>,
}

impl Default for ServerStatus {
    fn default() -> Self {
        Self {
            is_server_ok: true,
            is_maintenance: false,
            server_time: None,
        }
    }
}

/// Remote fetcher interface
#[async_trait]
pub trait ChainBackendEffects: Send + Sync {
    /// Fetch account/delegation state for a wallet
    async fn fetch_account_state(
        &self,
        wallet_id: &WalletId,
    ) -> Result<AccountSnapshot, BackendError>;

    /// Fetch the spendable balance for a wallet
    async fn fetch_balance(&self, wallet_id: &WalletId) -> Result<BalanceSnapshot, BackendError>;

    /// Fetch the transaction history for a wallet
    ///
    /// The result is a page of recent transactions; the caller merges it
    /// into what it already knows, keyed by transaction id.
    async fn fetch_transactions(
        &self,
        wallet_id: &WalletId,
    ) -> Result<Vec<TxRecord>, BackendError>;

    /// Fetch the current voting fund, if one is active
    async fn fetch_fund_info(&self) -> Result<Option<FundInfo>, BackendError>;

    /// Fetch server health
    async fn fetch_server_status(&self) -> Result<ServerStatus, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn registration_window_bounds() {
        let fund = FundInfo {
            registration_start: Utc.with_ymd_and_hms(2021, 10, 1, 0, 0, 0).unwrap(),
            registration_end: Utc.with_ymd_and_hms(2021, 10, 15, 0, 0, 0).unwrap(),
        };
        let inside = Utc.with_ymd_and_hms(2021, 10, 7, 12, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2021, 9, 30, 23, 59, 59).unwrap();
        let at_end = Utc.with_ymd_and_hms(2021, 10, 15, 0, 0, 0).unwrap();

        assert!(fund.is_registration_open(inside));
        assert!(!fund.is_registration_open(before));
        assert!(!fund.is_registration_open(at_end));
    }
}
