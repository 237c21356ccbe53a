//! # App Facade
//!
//! [`WalletApp`] is the entry point a UI shell binds to: it owns the
//! dispatcher task, the effect handlers and the recovery/sync components,
//! and exposes the handful of operations the shell drives. All state flows
//! back to the shell through snapshot subscriptions; none of these methods
//! return view data directly.

use std::sync::Arc;

use vela_core::effects::{
    ChainBackendEffects, DialogEffects, KeyStoreEffects, WalletStoreEffects,
};
use vela_core::identifiers::{InstallationId, WalletId};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::recovery::{BiometricRecoveryHandler, RecoveryAction, UnlockOutcome};
use crate::resolver::Mode;
use crate::session::{
    spawn_dispatcher, SessionEvent, SessionHandle, SessionSnapshot, SessionState, SessionStore,
};
use crate::sync::SyncOrchestrator;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The headless application core
pub struct WalletApp {
    session: SessionHandle,
    keystore: Arc<dyn KeyStoreEffects>,
    wallet_store: Arc<dyn WalletStoreEffects>,
    backend: Arc<dyn ChainBackendEffects>,
    recovery: BiometricRecoveryHandler,
    sync: SyncOrchestrator,
    dispatcher: JoinHandle<SessionStore>,
}

impl WalletApp {
    /// Wire up the core over the given effect handlers
    ///
    /// Spawns the session dispatcher task; must be called inside a tokio
    /// runtime.
    pub fn new(
        config: AppConfig,
        keystore: Arc<dyn KeyStoreEffects>,
        dialogs: Arc<dyn DialogEffects>,
        backend: Arc<dyn ChainBackendEffects>,
        wallet_store: Arc<dyn WalletStoreEffects>,
    ) -> Self {
        let (session, dispatcher) = spawn_dispatcher(SessionStore::new(config));
        let recovery = BiometricRecoveryHandler::new(keystore.clone(), dialogs);
        let sync = SyncOrchestrator::new(session.clone(), backend.clone(), wallet_store.clone());
        Self {
            session,
            keystore,
            wallet_store,
            backend,
            recovery,
            sync,
            dispatcher,
        }
    }

    /// Run bootstrap: probe the key store and initialize the session
    pub async fn bootstrap(&self, current_version: Option<String>) -> Result<Mode, AppError> {
        let is_biometric_hardware_supported =
            self.keystore.is_biometric_hardware_supported().await?;
        let can_enable_biometric_encryption =
            self.keystore.can_biometric_encryption_be_enabled().await?;
        let mode = self
            .session
            .dispatch(SessionEvent::BootstrapCompleted {
                installation_id: InstallationId::generate(),
                is_biometric_hardware_supported,
                can_enable_biometric_encryption,
                current_version,
            })
            .await?;
        Ok(mode)
    }

    /// Poll server health and feed the result into the session
    ///
    /// Drives the maintenance gate: a status with `is_maintenance` set
    /// suspends the session on the next resolve.
    pub async fn poll_server_status(&self) -> Result<Mode, AppError> {
        let status = self.backend.fetch_server_status().await?;
        let mode = self
            .session
            .dispatch(SessionEvent::ServerStatusFetched(status))
            .await?;
        Ok(mode)
    }

    /// Open a stored wallet and run the initial sync
    pub async fn open_wallet(&self, id: &WalletId) -> Result<Mode, AppError> {
        let snapshot = self.wallet_store.open_wallet(id).await?;
        let scheme = snapshot.meta.scheme;
        let mode = self
            .session
            .dispatch(SessionEvent::WalletOpened(snapshot))
            .await?;
        self.sync.run(id, scheme).await;
        Ok(mode)
    }

    /// Close the open wallet, releasing its resources before returning
    pub async fn close_wallet(&self) -> Result<Mode, AppError> {
        self.wallet_store.close_wallet().await?;
        let mode = self.session.dispatch(SessionEvent::WalletClosed).await?;
        Ok(mode)
    }

    /// Feed a biometric unlock outcome through the recovery handler
    ///
    /// Only a [`UnlockOutcome::Success`] authenticates; every failure path
    /// leaves the session locked.
    pub async fn submit_biometric_outcome(
        &self,
        outcome: UnlockOutcome,
    ) -> Result<RecoveryAction, AppError> {
        let installation_id = self
            .session
            .snapshot()
            .state
            .settings
            .installation_id
            .ok_or(AppError::NotBootstrapped)?;
        let action = self.recovery.handle(outcome, &installation_id).await?;
        if action == RecoveryAction::SigninAuthorized {
            self.session
                .dispatch(SessionEvent::AuthenticationSucceeded)
                .await?;
        }
        Ok(action)
    }

    /// Verify a PIN attempt against the configured hash
    ///
    /// Returns whether the PIN matched; a match authenticates the session.
    pub async fn submit_pin(&self, pin: &str) -> Result<bool, AppError> {
        let hash = self
            .session
            .snapshot()
            .state
            .settings
            .custom_pin_hash
            .ok_or(AppError::PinNotConfigured)?;
        if !hash.verify(pin) {
            return Ok(false);
        }
        self.session
            .dispatch(SessionEvent::AuthenticationSucceeded)
            .await?;
        Ok(true)
    }

    /// User-triggered refresh of the active wallet
    pub async fn refresh(&self) -> Result<(), AppError> {
        let snapshot = self.session.snapshot();
        let wallet = &snapshot.state.wallet;
        let id = wallet.id.clone().ok_or(AppError::NoActiveWallet)?;
        self.sync.run(&id, wallet.scheme).await;
        Ok(())
    }

    /// Lock the session
    pub async fn lock(&self) -> Result<Mode, AppError> {
        let mode = self.session.dispatch(SessionEvent::SessionLocked).await?;
        Ok(mode)
    }

    /// Full logout: wipe the session back to first-run and remove the
    /// biometric sign-in key
    pub async fn reset(&self) -> Result<Mode, AppError> {
        if let Some(installation_id) = self.session.snapshot().state.settings.installation_id {
            self.keystore.delete_signin_keys(&installation_id).await?;
        }
        let mode = self.session.dispatch(SessionEvent::Reset).await?;
        Ok(mode)
    }

    /// Dispatch an event directly
    ///
    /// The escape hatch for shell-originated events (locale selection,
    /// wallet creation, connectivity changes) that need no orchestration.
    pub async fn dispatch(&self, event: SessionEvent) -> Result<Mode, AppError> {
        Ok(self.session.dispatch(event).await?)
    }

    /// The most recent session snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Subscribe to session snapshots
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.session.subscribe()
    }

    /// Shut down the dispatcher and return the final state
    pub async fn shutdown(self) -> SessionState {
        let Self {
            session,
            sync,
            dispatcher,
            ..
        } = self;
        // The dispatcher exits once every handle clone is gone.
        drop(sync);
        drop(session);
        match dispatcher.await {
            Ok(store) => store.state().clone(),
            Err(error) => {
                tracing::warn!(%error, "dispatcher task did not shut down cleanly");
                SessionState::new()
            }
        }
    }
}
