//! # App-Layer Errors
//!
//! Two error types: [`DispatchError`] for events rejected at the dispatch
//! boundary, and [`AppError`] for the facade, which folds dispatch and
//! effect failures together.

use serde::{Deserialize, Serialize};
use vela_core::errors::VelaError;
use vela_core::identifiers::WalletId;

/// An event was rejected at the dispatch boundary
///
/// Rejected events leave the state untouched; the invariant set is enforced
/// here rather than discovered at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DispatchError {
    /// Authentication attempted before bootstrap completed
    #[error("authentication requires a completed bootstrap")]
    NotInitialized,

    /// Authentication attempted while maintenance mode is active
    #[error("authentication is unavailable during maintenance")]
    MaintenanceActive,

    /// Authentication attempted with an empty wallet inventory
    #[error("authentication requires at least one wallet")]
    NoWallets,

    /// System auth configured on a device that cannot provision it
    #[error("system authentication cannot be enabled on this device")]
    BiometricsUnavailable,

    /// A wallet with this id already exists
    #[error("wallet {0} already exists")]
    WalletAlreadyExists(WalletId),

    /// The referenced wallet is not in the inventory
    #[error("unknown wallet {0}")]
    UnknownWallet(WalletId),

    /// The dispatcher task is gone
    #[error("session store is no longer running")]
    StoreClosed,
}

/// Facade-level error: dispatch rejection, effect failure, or misuse
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An event was rejected by the store
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A collaborator effect failed
    #[error(transparent)]
    Effect(#[from] VelaError),

    /// The operation needs an open wallet
    #[error("no active wallet")]
    NoActiveWallet,

    /// The operation needs a completed bootstrap
    #[error("bootstrap has not completed")]
    NotBootstrapped,

    /// PIN verification requested but no PIN is configured
    #[error("no custom PIN is configured")]
    PinNotConfigured,
}
