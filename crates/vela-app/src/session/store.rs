//! # Session Store
//!
//! The single mutation path for [`SessionState`]. Every inbound event goes
//! through [`SessionStore::dispatch`], which guards the invariant set,
//! applies the mutation, re-resolves the mode and publishes a consistent
//! snapshot. All of that happens synchronously, never interleaved with
//! another mutation.
//!
//! Concurrent async callers go through a [`SessionHandle`]: events funnel
//! into one dispatcher task (single-writer discipline), and readers observe
//! snapshots on a watch channel, never a partially-updated state.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use vela_core::identifiers::WalletId;

use super::event::{SessionEvent, UnlockMethod};
use super::state::SessionState;
use crate::config::AppConfig;
use crate::errors::DispatchError;
use crate::resolver::{resolve, Mode};

/// Consistent view of the session published after every applied event
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// Mode resolved from `state`
    pub mode: Mode,
    /// The state the mode was resolved from
    pub state: SessionState,
}

/// Owner of the session state and the only writer to it
pub struct SessionStore {
    state: SessionState,
    config: AppConfig,
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Create a store with the initial (pre-bootstrap) state
    pub fn new(config: AppConfig) -> Self {
        let state = SessionState::new();
        let (snapshot_tx, _) = watch::channel(SessionSnapshot {
            mode: resolve(&state, &config),
            state: state.clone(),
        });
        Self {
            state,
            config,
            snapshot_tx,
        }
    }

    /// Read access to the current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mode resolved from the current state
    pub fn mode(&self) -> Mode {
        resolve(&self.state, &self.config)
    }

    /// Subscribe to snapshots
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Dispatch one event: guard, apply, re-resolve, publish
    ///
    /// Rejected events leave the state untouched. Fetch results tagged with
    /// a wallet that is no longer active are applied as no-ops (the
    /// stale-result guard), which is a success from the caller's view.
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<Mode, DispatchError> {
        let label = event.description();
        if let Err(error) = self.apply(event) {
            tracing::warn!(event = label, %error, "event rejected at dispatch boundary");
            return Err(error);
        }
        let mode = resolve(&self.state, &self.config);
        tracing::debug!(event = label, ?mode, "event applied");
        self.snapshot_tx.send_replace(SessionSnapshot {
            mode,
            state: self.state.clone(),
        });
        Ok(mode)
    }

    fn apply(&mut self, event: SessionEvent) -> Result<(), DispatchError> {
        let state = &mut self.state;
        match event {
            SessionEvent::BootstrapCompleted {
                installation_id,
                is_biometric_hardware_supported,
                can_enable_biometric_encryption,
                current_version,
            } => {
                state.settings.installation_id = Some(installation_id);
                state.settings.is_biometric_hardware_supported = is_biometric_hardware_supported;
                state.settings.can_enable_biometric_encryption = can_enable_biometric_encryption;
                state.settings.current_version = current_version;
                state.is_app_initialized = true;
            }

            SessionEvent::MaintenanceStatusChanged(active) => {
                state.is_maintenance = active;
            }

            SessionEvent::ServerStatusFetched(status) => {
                state.server_status.is_server_ok = status.is_server_ok;
                state.server_status.server_time = status.server_time;
                state.is_maintenance = status.is_maintenance;
            }

            SessionEvent::ConnectivityChanged(online) => {
                state.is_online = online;
            }

            SessionEvent::LocaleSelected(code) => {
                state.settings.language_code = Some(code);
            }

            SessionEvent::TosAccepted => {
                state.settings.accepted_tos = true;
            }

            SessionEvent::UnlockMethodConfigured(method) => match method {
                UnlockMethod::Pin(hash) => {
                    state.settings.custom_pin_hash = Some(hash);
                    state.settings.is_system_auth_enabled = false;
                }
                UnlockMethod::SystemAuth => {
                    if !state.settings.can_enable_biometric_encryption {
                        return Err(DispatchError::BiometricsUnavailable);
                    }
                    state.settings.is_system_auth_enabled = true;
                    state.settings.custom_pin_hash = None;
                }
            },

            SessionEvent::AuthenticationSucceeded => {
                if !state.is_app_initialized {
                    return Err(DispatchError::NotInitialized);
                }
                if state.is_maintenance {
                    return Err(DispatchError::MaintenanceActive);
                }
                if !state.has_any_wallet() {
                    return Err(DispatchError::NoWallets);
                }
                state.is_authenticated = true;
            }

            SessionEvent::SessionLocked => {
                state.is_authenticated = false;
            }

            SessionEvent::WalletCreated(meta) => {
                if state.wallets.contains_key(&meta.id) {
                    return Err(DispatchError::WalletAlreadyExists(meta.id));
                }
                state.wallets.insert(meta.id.clone(), meta);
            }

            SessionEvent::WalletRenamed { id, name } => {
                let meta = state
                    .wallets
                    .get_mut(&id)
                    .ok_or_else(|| DispatchError::UnknownWallet(id.clone()))?;
                meta.name = name.clone();
                if state.wallet.matches(&id) {
                    state.wallet.name = name;
                }
            }

            SessionEvent::EasyConfirmationChanged { id, enabled } => {
                let meta = state
                    .wallets
                    .get_mut(&id)
                    .ok_or_else(|| DispatchError::UnknownWallet(id.clone()))?;
                meta.is_easy_confirmation_enabled = enabled;
                if state.wallet.matches(&id) {
                    state.wallet.is_easy_confirmation_enabled = enabled;
                }
            }

            SessionEvent::WalletDeleted(id) => {
                if state.wallets.remove(&id).is_none() {
                    return Err(DispatchError::UnknownWallet(id));
                }
                if state.wallet.matches(&id) {
                    state.clear_active_wallet();
                }
                // Deleting the last wallet ends the session: an
                // authenticated state with an empty inventory must stay
                // unreachable.
                if state.wallets.is_empty() {
                    state.is_authenticated = false;
                }
            }

            SessionEvent::WalletOpened(snapshot) => {
                let meta = state
                    .wallets
                    .get(&snapshot.meta.id)
                    .cloned()
                    .ok_or_else(|| DispatchError::UnknownWallet(snapshot.meta.id.clone()))?;
                // Fully reset before loading the next wallet; nothing from a
                // previous session may leak into this one.
                state.clear_active_wallet();
                state.wallet.load(&meta, snapshot);
            }

            SessionEvent::WalletClosed => {
                state.clear_active_wallet();
            }

            SessionEvent::AccountFetchStarted { wallet_id } => {
                if self.is_active(&wallet_id, "account") {
                    self.state.account_state.status.begin();
                }
            }

            SessionEvent::AccountFetched { wallet_id, result } => {
                if self.is_active(&wallet_id, "account") {
                    match result {
                        Ok(snapshot) => self.state.account_state.apply(snapshot),
                        Err(error) => self.state.account_state.status.fail(error),
                    }
                }
            }

            SessionEvent::BalanceFetchStarted { wallet_id } => {
                if self.is_active(&wallet_id, "balance") {
                    self.state.balance.status.begin();
                }
            }

            SessionEvent::BalanceFetched { wallet_id, result } => {
                if self.is_active(&wallet_id, "balance") {
                    match result {
                        Ok(snapshot) => self.state.balance.apply(snapshot),
                        Err(error) => self.state.balance.status.fail(error),
                    }
                }
            }

            SessionEvent::HistoryFetchStarted { wallet_id } => {
                if self.is_active(&wallet_id, "history") {
                    self.state.tx_history.begin();
                }
            }

            SessionEvent::HistoryFetched { wallet_id, result } => {
                if self.is_active(&wallet_id, "history") {
                    match result {
                        Ok(records) => {
                            self.state.wallet.merge_transactions(records);
                            self.state.tx_history.succeed();
                        }
                        Err(error) => self.state.tx_history.fail(error),
                    }
                }
            }

            SessionEvent::FundInfoFetched { wallet_id, fund } => {
                if self.is_active(&wallet_id, "fund info") {
                    self.state.fund_info.current = fund;
                }
            }

            SessionEvent::FlawedWalletChecked {
                wallet_id,
                is_flawed,
            } => {
                if self.is_active(&wallet_id, "flawed-wallet check") {
                    self.state.is_flawed_wallet = is_flawed;
                }
            }

            SessionEvent::CrashReportsToggled(enabled) => {
                state.settings.send_crash_reports = enabled;
            }

            SessionEvent::Reset => {
                state.reset();
            }
        }
        Ok(())
    }

    /// Stale-result guard: is this fetch result for the active wallet?
    fn is_active(&self, wallet_id: &WalletId, what: &'static str) -> bool {
        let active = self.state.wallet.matches(wallet_id);
        if !active {
            tracing::debug!(wallet = %wallet_id, fetch = what, "discarding result for inactive wallet");
        }
        active
    }
}

struct Envelope {
    event: SessionEvent,
    reply: oneshot::Sender<Result<Mode, DispatchError>>,
}

/// Cheap handle for dispatching events from concurrent async callers
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Envelope>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    /// Dispatch an event through the single dispatcher task
    pub async fn dispatch(&self, event: SessionEvent) -> Result<Mode, DispatchError> {
        let (reply, result) = oneshot::channel();
        self.tx
            .send(Envelope { event, reply })
            .map_err(|_| DispatchError::StoreClosed)?;
        result.await.map_err(|_| DispatchError::StoreClosed)?
    }

    /// The most recently published snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Subscribe to snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }
}

/// Spawn the dispatcher task that serializes all mutations
///
/// The task runs until every [`SessionHandle`] clone is dropped, then
/// returns the store so the final state can be inspected.
pub fn spawn_dispatcher(mut store: SessionStore) -> (SessionHandle, JoinHandle<SessionStore>) {
    let snapshot_rx = store.subscribe();
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
    let task = tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            let result = store.dispatch(envelope.event);
            // A dropped reply just means the caller stopped waiting.
            let _ = envelope.reply.send(result);
        }
        store
    });
    (SessionHandle { tx, snapshot_rx }, task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use vela_core::auth::PinHash;
    use vela_core::effects::{AccountSnapshot, WalletSnapshot};
    use vela_core::identifiers::{InstallationId, NetworkId, WalletScheme};
    use vela_core::wallet_meta::WalletMeta;

    fn bootstrapped_store() -> SessionStore {
        let mut store = SessionStore::new(AppConfig::default());
        store
            .dispatch(SessionEvent::BootstrapCompleted {
                installation_id: InstallationId::generate(),
                is_biometric_hardware_supported: true,
                can_enable_biometric_encryption: true,
                current_version: Some("4.7.0".into()),
            })
            .expect("bootstrap should apply");
        store
    }

    fn meta(material: &[u8]) -> WalletMeta {
        WalletMeta::new(
            "Savings",
            NetworkId::MAINNET,
            WalletScheme::Cip1852,
            false,
            material,
        )
    }

    #[test]
    fn configuring_pin_clears_system_auth() {
        let mut store = bootstrapped_store();
        store
            .dispatch(SessionEvent::UnlockMethodConfigured(UnlockMethod::SystemAuth))
            .unwrap();
        assert!(store.state().settings.is_system_auth_enabled);

        store
            .dispatch(SessionEvent::UnlockMethodConfigured(UnlockMethod::Pin(
                PinHash::derive("123456", [0u8; 16]),
            )))
            .unwrap();
        assert!(!store.state().settings.is_system_auth_enabled);
        assert!(store.state().settings.custom_pin_hash.is_some());
    }

    #[test]
    fn system_auth_requires_provisionable_biometrics() {
        let mut store = SessionStore::new(AppConfig::default());
        store
            .dispatch(SessionEvent::BootstrapCompleted {
                installation_id: InstallationId::generate(),
                is_biometric_hardware_supported: false,
                can_enable_biometric_encryption: false,
                current_version: None,
            })
            .unwrap();

        let result =
            store.dispatch(SessionEvent::UnlockMethodConfigured(UnlockMethod::SystemAuth));
        assert_matches!(result, Err(DispatchError::BiometricsUnavailable));
        assert!(!store.state().settings.is_system_auth_enabled);
    }

    #[test]
    fn authentication_without_wallets_is_rejected() {
        let mut store = bootstrapped_store();
        let result = store.dispatch(SessionEvent::AuthenticationSucceeded);
        assert_matches!(result, Err(DispatchError::NoWallets));
        assert!(!store.state().is_authenticated);
    }

    #[test]
    fn authentication_during_maintenance_is_rejected() {
        let mut store = bootstrapped_store();
        store
            .dispatch(SessionEvent::WalletCreated(meta(b"xpub")))
            .unwrap();
        store
            .dispatch(SessionEvent::MaintenanceStatusChanged(true))
            .unwrap();

        let result = store.dispatch(SessionEvent::AuthenticationSucceeded);
        assert_matches!(result, Err(DispatchError::MaintenanceActive));
    }

    #[test]
    fn duplicate_wallet_creation_is_rejected() {
        let mut store = bootstrapped_store();
        store
            .dispatch(SessionEvent::WalletCreated(meta(b"xpub")))
            .unwrap();
        let result = store.dispatch(SessionEvent::WalletCreated(meta(b"xpub")));
        assert_matches!(result, Err(DispatchError::WalletAlreadyExists(_)));
        assert_eq!(store.state().wallets.len(), 1);
    }

    #[test]
    fn stale_account_result_is_discarded() {
        let mut store = bootstrapped_store();
        let wallet = meta(b"xpub-a");
        let other = meta(b"xpub-b");
        let wallet_id = wallet.id.clone();
        let other_id = other.id.clone();
        store
            .dispatch(SessionEvent::WalletCreated(wallet.clone()))
            .unwrap();
        store.dispatch(SessionEvent::WalletCreated(other)).unwrap();
        store
            .dispatch(SessionEvent::WalletOpened(WalletSnapshot::empty(wallet)))
            .unwrap();

        // A result tagged for a different wallet is a no-op.
        store
            .dispatch(SessionEvent::AccountFetched {
                wallet_id: other_id,
                result: Ok(AccountSnapshot {
                    reward_balance: 999,
                    ..AccountSnapshot::default()
                }),
            })
            .unwrap();
        assert_eq!(store.state().account_state.reward_balance, 0);

        // The matching wallet's result applies.
        store
            .dispatch(SessionEvent::AccountFetched {
                wallet_id,
                result: Ok(AccountSnapshot {
                    reward_balance: 7,
                    ..AccountSnapshot::default()
                }),
            })
            .unwrap();
        assert_eq!(store.state().account_state.reward_balance, 7);
    }

    #[test]
    fn opening_a_wallet_resets_the_previous_session() {
        let mut store = bootstrapped_store();
        let first = meta(b"xpub-a");
        let second = meta(b"xpub-b");
        let first_id = first.id.clone();
        store
            .dispatch(SessionEvent::WalletCreated(first.clone()))
            .unwrap();
        store
            .dispatch(SessionEvent::WalletCreated(second.clone()))
            .unwrap();

        store
            .dispatch(SessionEvent::WalletOpened(WalletSnapshot::empty(first)))
            .unwrap();
        store
            .dispatch(SessionEvent::AccountFetched {
                wallet_id: first_id,
                result: Err("timeout".into()),
            })
            .unwrap();
        assert!(store.state().account_state.status.last_error.is_some());

        store
            .dispatch(SessionEvent::WalletOpened(WalletSnapshot::empty(
                second.clone(),
            )))
            .unwrap();
        assert_eq!(store.state().account_state.status.last_error, None);
        assert_eq!(store.state().wallet.id, Some(second.id));
    }

    #[test]
    fn rename_and_easy_confirmation_reach_the_active_wallet() {
        let mut store = bootstrapped_store();
        let wallet = meta(b"xpub");
        let id = wallet.id.clone();
        store
            .dispatch(SessionEvent::WalletCreated(wallet.clone()))
            .unwrap();
        store
            .dispatch(SessionEvent::WalletOpened(WalletSnapshot::empty(wallet)))
            .unwrap();

        store
            .dispatch(SessionEvent::WalletRenamed {
                id: id.clone(),
                name: "Spending".into(),
            })
            .unwrap();
        store
            .dispatch(SessionEvent::EasyConfirmationChanged {
                id: id.clone(),
                enabled: true,
            })
            .unwrap();

        assert_eq!(store.state().wallets[&id].name, "Spending");
        assert_eq!(store.state().wallet.name, "Spending");
        assert!(store.state().wallets[&id].is_easy_confirmation_enabled);
        assert!(store.state().wallet.is_easy_confirmation_enabled);

        let missing = meta(b"other").id;
        let result = store.dispatch(SessionEvent::WalletRenamed {
            id: missing,
            name: "Nope".into(),
        });
        assert_matches!(result, Err(DispatchError::UnknownWallet(_)));
    }

    #[test]
    fn handle_serializes_dispatch_through_one_task() {
        tokio_test::block_on(async {
            let (handle, task) = spawn_dispatcher(SessionStore::new(AppConfig::default()));

            let mode = handle
                .dispatch(SessionEvent::BootstrapCompleted {
                    installation_id: InstallationId::generate(),
                    is_biometric_hardware_supported: false,
                    can_enable_biometric_encryption: false,
                    current_version: None,
                })
                .await
                .unwrap();
            assert_matches!(mode, Mode::FirstRun(_));
            assert!(handle.snapshot().state.is_app_initialized);

            drop(handle);
            let store = task.await.expect("dispatcher should finish cleanly");
            assert!(store.state().is_app_initialized);
        });
    }
}
