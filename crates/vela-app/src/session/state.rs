//! # Session State
//!
//! The single process-wide state of the app: initialization flags, settings,
//! the wallet inventory, and the active wallet's sub-states. Created once at
//! startup with defaults, mutated only through
//! [`SessionStore::dispatch`](super::SessionStore::dispatch), cleared (not
//! destroyed) on full reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use vela_core::auth::PinHash;
use vela_core::identifiers::{InstallationId, WalletId};
use vela_core::wallet_meta::WalletMeta;

use crate::views::{AccountState, ActiveWallet, BalanceState, FundInfoState, TxHistoryState};

/// Cached result of the last server health poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatusCache {
    /// Whether the server considered itself healthy
    pub is_server_ok: bool,
    /// Server clock at poll time
    pub server_time: Option<DateTime<Utc>>,
}

impl Default for ServerStatusCache {
    fn default() -> Self {
        Self {
            is_server_ok: true,
            server_time: None,
        }
    }
}

/// Persisted app settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Selected locale; `None` until the user completes locale selection
    pub language_code: Option<String>,
    /// Whether the terms of service were accepted
    pub accepted_tos: bool,
    /// Stable per-install identifier, assigned at bootstrap
    pub installation_id: Option<InstallationId>,
    /// Salted digest of the custom PIN, when PIN unlock is configured
    pub custom_pin_hash: Option<PinHash>,
    /// Whether platform biometric/device-credential auth is the unlock method
    pub is_system_auth_enabled: bool,
    /// Key-store probe: device has biometric hardware
    pub is_biometric_hardware_supported: bool,
    /// Key-store probe: biometric encryption can currently be provisioned
    pub can_enable_biometric_encryption: bool,
    /// Whether crash reports are sent
    pub send_crash_reports: bool,
    /// App version recorded at bootstrap
    pub current_version: Option<String>,
}

impl Settings {
    /// Whether an unlock method has been configured
    pub fn has_unlock_method(&self) -> bool {
        self.is_system_auth_enabled || self.custom_pin_hash.is_some()
    }
}

/// The session state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Set once bootstrap (key-store probe, settings load) completes
    pub is_app_initialized: bool,
    /// Set by server-status polling; independent of auth
    pub is_maintenance: bool,
    /// Connectivity flag, drives the offline banner
    pub is_online: bool,
    /// Last server health poll
    pub server_status: ServerStatusCache,
    /// Persisted settings
    pub settings: Settings,
    /// True only within an unlocked session
    pub is_authenticated: bool,
    /// Inventory of wallets known to the device
    pub wallets: HashMap<WalletId, WalletMeta>,
    /// Sub-state of the currently loaded wallet
    pub wallet: ActiveWallet,
    /// Account/delegation fetch sub-state
    pub account_state: AccountState,
    /// Transaction history sync sub-state
    pub tx_history: TxHistoryState,
    /// Spendable balance fetch sub-state
    pub balance: BalanceState,
    /// Voting fund sub-state
    pub fund_info: FundInfoState,
    /// Set when flawed-wallet detection finds an inconsistency
    pub is_flawed_wallet: bool,
}

impl SessionState {
    /// State at first launch, before bootstrap completes
    pub fn new() -> Self {
        Self {
            is_online: true,
            ..Self::default()
        }
    }

    /// Whether at least one wallet exists on the device
    pub fn has_any_wallet(&self) -> bool {
        !self.wallets.is_empty()
    }

    /// Clear everything tied to the open wallet session
    ///
    /// Runs on wallet close and before loading the next wallet, so no fetch
    /// sub-state or flaw flag can leak between wallets.
    pub fn clear_active_wallet(&mut self) {
        self.wallet.clear();
        self.account_state = AccountState::default();
        self.tx_history = TxHistoryState::default();
        self.balance = BalanceState::default();
        self.fund_info = FundInfoState::default();
        self.is_flawed_wallet = false;
    }

    /// Reset to the post-bootstrap defaults, keeping only per-install facts
    ///
    /// Full logout/reset: wallets, settings and the session are wiped; the
    /// installation id and key-store probe results survive because they
    /// describe the install, not the user.
    pub fn reset(&mut self) {
        let settings = Settings {
            installation_id: self.settings.installation_id,
            is_biometric_hardware_supported: self.settings.is_biometric_hardware_supported,
            can_enable_biometric_encryption: self.settings.can_enable_biometric_encryption,
            current_version: self.settings.current_version.clone(),
            ..Settings::default()
        };
        *self = Self {
            is_app_initialized: self.is_app_initialized,
            is_online: self.is_online,
            settings,
            ..Self::default()
        };
    }
}
