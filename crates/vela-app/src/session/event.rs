//! # Session Events
//!
//! Every mutation of [`SessionState`](super::SessionState) is one of these
//! events, dispatched through the store. External inputs (network responses,
//! biometric prompts, user actions) are translated into events at the app
//! boundary; nothing mutates state directly.

use serde::{Deserialize, Serialize};

use vela_core::auth::PinHash;
use vela_core::effects::{
    AccountSnapshot, BalanceSnapshot, FundInfo, ServerStatus, TxRecord, WalletSnapshot,
};
use vela_core::identifiers::{InstallationId, WalletId};
use vela_core::wallet_meta::WalletMeta;

/// Unlock method chosen during first-run setup (or reconfigured later)
///
/// Exactly one method is active at a time: configuring either clears the
/// other, so a state with both is unreachable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockMethod {
    /// Custom PIN; carries the salted hash, never the PIN itself
    Pin(PinHash),
    /// Platform biometric/device-credential authentication
    SystemAuth,
}

/// A state mutation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Bootstrap finished: key store probed, settings loaded
    BootstrapCompleted {
        /// Stable per-install identifier
        installation_id: InstallationId,
        /// Key-store probe: device has biometric hardware
        is_biometric_hardware_supported: bool,
        /// Key-store probe: biometric encryption can be provisioned
        can_enable_biometric_encryption: bool,
        /// App version string
        current_version: Option<String>,
    },

    /// Maintenance mode engaged or cleared
    MaintenanceStatusChanged(bool),

    /// Server health poll returned
    ServerStatusFetched(ServerStatus),

    /// Connectivity changed
    ConnectivityChanged(bool),

    /// User completed locale selection
    LocaleSelected(String),

    /// User accepted the terms of service
    TosAccepted,

    /// Unlock method configured during first-run or settings
    UnlockMethodConfigured(UnlockMethod),

    /// An unlock attempt succeeded; the session becomes authenticated
    AuthenticationSucceeded,

    /// The session locked (user action, background timeout)
    SessionLocked,

    /// A wallet was created or imported
    WalletCreated(WalletMeta),

    /// The user renamed a wallet
    WalletRenamed {
        /// Wallet to rename
        id: WalletId,
        /// New display name
        name: String,
    },

    /// The user toggled biometric spending confirmation for a wallet
    EasyConfirmationChanged {
        /// Wallet to update
        id: WalletId,
        /// New setting
        enabled: bool,
    },

    /// A wallet was deleted from the device
    WalletDeleted(WalletId),

    /// A stored wallet was opened and its snapshot loaded
    WalletOpened(WalletSnapshot),

    /// The open wallet session ended
    WalletClosed,

    /// Account-state refresh started
    AccountFetchStarted {
        /// Wallet the fetch was issued for
        wallet_id: WalletId,
    },

    /// Account-state refresh finished
    AccountFetched {
        /// Wallet the fetch was issued for
        wallet_id: WalletId,
        /// Fetched snapshot or error text
        result: Result<AccountSnapshot, String>,
    },

    /// Balance refresh started
    BalanceFetchStarted {
        /// Wallet the fetch was issued for
        wallet_id: WalletId,
    },

    /// Balance refresh finished
    BalanceFetched {
        /// Wallet the fetch was issued for
        wallet_id: WalletId,
        /// Fetched snapshot or error text
        result: Result<BalanceSnapshot, String>,
    },

    /// History refresh started
    HistoryFetchStarted {
        /// Wallet the fetch was issued for
        wallet_id: WalletId,
    },

    /// History refresh finished; records merge into the known set
    HistoryFetched {
        /// Wallet the fetch was issued for
        wallet_id: WalletId,
        /// Fetched page or error text
        result: Result<Vec<TxRecord>, String>,
    },

    /// Voting fund fetch finished (best-effort; failures arrive as `None`)
    FundInfoFetched {
        /// Wallet the fetch was issued for
        wallet_id: WalletId,
        /// The active fund, if any
        fund: Option<FundInfo>,
    },

    /// Flawed-wallet detection finished
    FlawedWalletChecked {
        /// Wallet that was checked
        wallet_id: WalletId,
        /// Whether an inconsistency was found
        is_flawed: bool,
    },

    /// User toggled crash report submission
    CrashReportsToggled(bool),

    /// Full logout/reset back to first-run
    Reset,
}

impl SessionEvent {
    /// Short human-readable label for tracing
    pub fn description(&self) -> &'static str {
        match self {
            Self::BootstrapCompleted { .. } => "bootstrap completed",
            Self::MaintenanceStatusChanged(_) => "maintenance status changed",
            Self::ServerStatusFetched(_) => "server status fetched",
            Self::ConnectivityChanged(_) => "connectivity changed",
            Self::LocaleSelected(_) => "locale selected",
            Self::TosAccepted => "tos accepted",
            Self::UnlockMethodConfigured(_) => "unlock method configured",
            Self::AuthenticationSucceeded => "authentication succeeded",
            Self::SessionLocked => "session locked",
            Self::WalletCreated(_) => "wallet created",
            Self::WalletRenamed { .. } => "wallet renamed",
            Self::EasyConfirmationChanged { .. } => "easy confirmation changed",
            Self::WalletDeleted(_) => "wallet deleted",
            Self::WalletOpened(_) => "wallet opened",
            Self::WalletClosed => "wallet closed",
            Self::AccountFetchStarted { .. } => "account fetch started",
            Self::AccountFetched { .. } => "account fetched",
            Self::BalanceFetchStarted { .. } => "balance fetch started",
            Self::BalanceFetched { .. } => "balance fetched",
            Self::HistoryFetchStarted { .. } => "history fetch started",
            Self::HistoryFetched { .. } => "history fetched",
            Self::FundInfoFetched { .. } => "fund info fetched",
            Self::FlawedWalletChecked { .. } => "flawed wallet checked",
            Self::CrashReportsToggled(_) => "crash reports toggled",
            Self::Reset => "reset",
        }
    }
}
