//! # Sync Orchestrator
//!
//! Runs once per entry into the unlocked mode for the active wallet, and
//! again on explicit user refresh. Four concerns, each independently
//! failable: account/delegation state, spendable balance, transaction
//! history, and the voting fund window. Failures become sticky per-field
//! errors in session state; nothing here blocks rendering.
//!
//! Every result event carries the wallet id the fetch was issued for; the
//! store discards results whose id no longer matches the active wallet, so
//! a wallet closed or replaced mid-sync can never be mutated by a stale
//! response.

use std::sync::Arc;

use vela_core::effects::{ChainBackendEffects, WalletStoreEffects};
use vela_core::identifiers::{WalletId, WalletScheme};

use crate::session::{SessionEvent, SessionHandle};

/// Drives the post-unlock refresh pipeline
pub struct SyncOrchestrator {
    session: SessionHandle,
    backend: Arc<dyn ChainBackendEffects>,
    wallet_store: Arc<dyn WalletStoreEffects>,
}

impl SyncOrchestrator {
    /// Create an orchestrator over the session and its collaborators
    pub fn new(
        session: SessionHandle,
        backend: Arc<dyn ChainBackendEffects>,
        wallet_store: Arc<dyn WalletStoreEffects>,
    ) -> Self {
        Self {
            session,
            backend,
            wallet_store,
        }
    }

    /// Run the full refresh pipeline for a wallet
    ///
    /// The network-bound steps run concurrently; flawed-wallet detection
    /// runs after them so it sees the refreshed data.
    pub async fn run(&self, wallet_id: &WalletId, scheme: WalletScheme) {
        tracing::debug!(wallet = %wallet_id, "sync started");
        tokio::join!(
            self.refresh_account(wallet_id),
            self.refresh_balance(wallet_id),
            self.refresh_history(wallet_id),
            self.refresh_fund_info(wallet_id, scheme),
        );
        self.check_flawed(wallet_id).await;
        tracing::debug!(wallet = %wallet_id, "sync finished");
    }

    async fn refresh_account(&self, wallet_id: &WalletId) {
        self.dispatch(SessionEvent::AccountFetchStarted {
            wallet_id: wallet_id.clone(),
        })
        .await;
        let result = self
            .backend
            .fetch_account_state(wallet_id)
            .await
            .map_err(|e| e.to_string());
        self.dispatch(SessionEvent::AccountFetched {
            wallet_id: wallet_id.clone(),
            result,
        })
        .await;
    }

    async fn refresh_balance(&self, wallet_id: &WalletId) {
        self.dispatch(SessionEvent::BalanceFetchStarted {
            wallet_id: wallet_id.clone(),
        })
        .await;
        let result = self
            .backend
            .fetch_balance(wallet_id)
            .await
            .map_err(|e| e.to_string());
        self.dispatch(SessionEvent::BalanceFetched {
            wallet_id: wallet_id.clone(),
            result,
        })
        .await;
    }

    async fn refresh_history(&self, wallet_id: &WalletId) {
        self.dispatch(SessionEvent::HistoryFetchStarted {
            wallet_id: wallet_id.clone(),
        })
        .await;
        let result = self
            .backend
            .fetch_transactions(wallet_id)
            .await
            .map_err(|e| e.to_string());
        self.dispatch(SessionEvent::HistoryFetched {
            wallet_id: wallet_id.clone(),
            result,
        })
        .await;
    }

    /// Best-effort: any failure suppresses the voting banner instead of
    /// surfacing an error
    async fn refresh_fund_info(&self, wallet_id: &WalletId, scheme: WalletScheme) {
        if !scheme.supports_voting() {
            return;
        }
        let fund = match self.backend.fetch_fund_info().await {
            Ok(fund) => fund,
            Err(error) => {
                tracing::debug!(%error, "could not get fund info from server");
                None
            }
        };
        self.dispatch(SessionEvent::FundInfoFetched {
            wallet_id: wallet_id.clone(),
            fund,
        })
        .await;
    }

    async fn check_flawed(&self, wallet_id: &WalletId) {
        match self.wallet_store.detect_flawed_wallet(wallet_id).await {
            Ok(is_flawed) => {
                self.dispatch(SessionEvent::FlawedWalletChecked {
                    wallet_id: wallet_id.clone(),
                    is_flawed,
                })
                .await;
            }
            Err(error) => {
                tracing::warn!(wallet = %wallet_id, %error, "flawed-wallet detection failed");
            }
        }
    }

    async fn dispatch(&self, event: SessionEvent) {
        // Fetch events are never rejected; an error here only means the
        // session ended while the fetch was in flight.
        if let Err(error) = self.session.dispatch(event).await {
            tracing::debug!(%error, "sync event not delivered");
        }
    }
}
