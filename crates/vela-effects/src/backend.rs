//! Chain Backend Effect Handlers
//!
//! [`ScriptedBackendHandler`] answers fetches from per-endpoint queues of
//! scripted results, falling back to benign defaults when a queue is empty.
//! Tests script failures and payloads; headless hosts get an offline-safe
//! backend for free.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use vela_core::effects::{
    AccountSnapshot, BackendError, BalanceSnapshot, ChainBackendEffects, FundInfo, ServerStatus,
    TxRecord,
};
use vela_core::identifiers::WalletId;

#[derive(Debug, Default)]
struct Script {
    account: VecDeque<Result<AccountSnapshot, BackendError>>,
    balance: VecDeque<Result<BalanceSnapshot, BackendError>>,
    transactions: VecDeque<Result<Vec<TxRecord>, BackendError>>,
    fund: VecDeque<Result<Option<FundInfo>, BackendError>>,
    server_status: VecDeque<Result<ServerStatus, BackendError>>,
}

/// Backend handler that replays scripted fetch results
#[derive(Debug, Default)]
pub struct ScriptedBackendHandler {
    script: Mutex<Script>,
}

impl ScriptedBackendHandler {
    /// Create a handler with empty scripts (every fetch succeeds with
    /// defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next account-state result
    pub fn push_account_result(&self, result: Result<AccountSnapshot, BackendError>) {
        self.script.lock().account.push_back(result);
    }

    /// Queue the next balance result
    pub fn push_balance_result(&self, result: Result<BalanceSnapshot, BackendError>) {
        self.script.lock().balance.push_back(result);
    }

    /// Queue the next transaction-history result
    pub fn push_transactions_result(&self, result: Result<Vec<TxRecord>, BackendError>) {
        self.script.lock().transactions.push_back(result);
    }

    /// Queue the next fund-info result
    pub fn push_fund_result(&self, result: Result<Option<FundInfo>, BackendError>) {
        self.script.lock().fund.push_back(result);
    }

    /// Queue the next server-status result
    pub fn push_server_status(&self, result: Result<ServerStatus, BackendError>) {
        self.script.lock().server_status.push_back(result);
    }
}

#[async_trait]
impl ChainBackendEffects for ScriptedBackendHandler {
    async fn fetch_account_state(
        &self,
        _wallet_id: &WalletId,
    ) -> Result<AccountSnapshot, BackendError> {
        self.script
            .lock()
            .account
            .pop_front()
            .unwrap_or_else(|| Ok(AccountSnapshot::default()))
    }

    async fn fetch_balance(&self, _wallet_id: &WalletId) -> Result<BalanceSnapshot, BackendError> {
        self.script
            .lock()
            .balance
            .pop_front()
            .unwrap_or_else(|| Ok(BalanceSnapshot::default()))
    }

    async fn fetch_transactions(
        &self,
        _wallet_id: &WalletId,
    ) -> Result<Vec<TxRecord>, BackendError> {
        self.script
            .lock()
            .transactions
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_fund_info(&self) -> Result<Option<FundInfo>, BackendError> {
        self.script
            .lock()
            .fund
            .pop_front()
            .unwrap_or_else(|| Ok(None))
    }

    async fn fetch_server_status(&self) -> Result<ServerStatus, BackendError> {
        self.script
            .lock()
            .server_status
            .pop_front()
            .unwrap_or_else(|| Ok(ServerStatus::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_results_replay_in_order() {
        let handler = ScriptedBackendHandler::new();
        let wallet = WalletId::derive(b"w");

        handler.push_account_result(Err(BackendError::network("down")));
        handler.push_account_result(Ok(AccountSnapshot {
            reward_balance: 42,
            ..AccountSnapshot::default()
        }));

        assert!(handler.fetch_account_state(&wallet).await.is_err());
        let snapshot = handler.fetch_account_state(&wallet).await.unwrap();
        assert_eq!(snapshot.reward_balance, 42);

        // Exhausted script falls back to the default.
        let snapshot = handler.fetch_account_state(&wallet).await.unwrap();
        assert_eq!(snapshot, AccountSnapshot::default());
    }

    #[tokio::test]
    async fn empty_fund_script_means_no_active_fund() {
        let handler = ScriptedBackendHandler::new();
        assert_eq!(handler.fetch_fund_info().await.unwrap(), None);
    }
}
