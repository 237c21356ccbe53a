//! Wallet Storage Effects Trait Definitions
//!
//! On-device wallet storage is a collaborator: the session core opens and
//! closes wallets through this trait and receives an opaque snapshot of the
//! stored data. The storage format itself is owned by the handler.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::VelaError;
use crate::identifiers::WalletId;
use crate::wallet_meta::WalletMeta;

/// Wallet storage operation error
pub type WalletStoreError = VelaError;

/// Stored wallet data as handed to the session core on open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// The wallet's inventory metadata
    pub meta: WalletMeta,
    /// Receive addresses derived so far
    pub external_addresses: Vec<String>,
    /// Which of those addresses have been seen on chain
    pub used_address_flags: HashMap<String, bool>,
}

impl WalletSnapshot {
    /// Snapshot with no derived addresses yet
    pub fn empty(meta: WalletMeta) -> Self {
        Self {
            meta,
            external_addresses: Vec::new(),
            used_address_flags: HashMap::new(),
        }
    }
}

/// Wallet storage interface
///
/// At most one wallet is open at a time; handlers must release the previous
/// wallet's resources before `open_wallet` returns for a new one.
#[async_trait]
pub trait WalletStoreEffects: Send + Sync {
    /// Open a stored wallet and return its snapshot
    async fn open_wallet(&self, id: &WalletId) -> Result<WalletSnapshot, WalletStoreError>;

    /// Close the currently open wallet, releasing its resources
    ///
    /// A no-op when no wallet is open.
    async fn close_wallet(&self) -> Result<(), WalletStoreError>;

    /// Check the stored wallet data for derivation/address inconsistencies
    async fn detect_flawed_wallet(&self, id: &WalletId) -> Result<bool, WalletStoreError>;
}
