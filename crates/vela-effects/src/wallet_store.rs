//! Wallet Storage Effect Handlers
//!
//! [`MemoryWalletStoreHandler`] keeps wallet snapshots in memory and tracks
//! which wallet is open. Flawed-wallet detection is scripted per wallet id.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

use vela_core::effects::{WalletSnapshot, WalletStoreEffects, WalletStoreError};
use vela_core::identifiers::WalletId;

/// In-memory wallet storage
#[derive(Debug, Default)]
pub struct MemoryWalletStoreHandler {
    wallets: Mutex<HashMap<WalletId, WalletSnapshot>>,
    flawed: Mutex<HashSet<WalletId>>,
    open: Mutex<Option<WalletId>>,
}

impl MemoryWalletStoreHandler {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wallet snapshot to the store
    pub fn insert_wallet(&self, snapshot: WalletSnapshot) {
        self.wallets
            .lock()
            .insert(snapshot.meta.id.clone(), snapshot);
    }

    /// Mark a stored wallet as flawed for detection
    pub fn mark_flawed(&self, id: &WalletId) {
        self.flawed.lock().insert(id.clone());
    }

    /// The currently open wallet, if any
    pub fn open_wallet_id(&self) -> Option<WalletId> {
        self.open.lock().clone()
    }
}

#[async_trait]
impl WalletStoreEffects for MemoryWalletStoreHandler {
    async fn open_wallet(&self, id: &WalletId) -> Result<WalletSnapshot, WalletStoreError> {
        let snapshot = self
            .wallets
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| WalletStoreError::not_found(format!("wallet {id}")))?;
        *self.open.lock() = Some(id.clone());
        Ok(snapshot)
    }

    async fn close_wallet(&self) -> Result<(), WalletStoreError> {
        *self.open.lock() = None;
        Ok(())
    }

    async fn detect_flawed_wallet(&self, id: &WalletId) -> Result<bool, WalletStoreError> {
        Ok(self.flawed.lock().contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::identifiers::{NetworkId, WalletScheme};
    use vela_core::wallet_meta::WalletMeta;

    fn snapshot(material: &[u8]) -> WalletSnapshot {
        WalletSnapshot::empty(WalletMeta::new(
            "Test",
            NetworkId::MAINNET,
            WalletScheme::Cip1852,
            false,
            material,
        ))
    }

    #[tokio::test]
    async fn open_then_close_tracks_the_active_wallet() {
        let store = MemoryWalletStoreHandler::new();
        let snap = snapshot(b"xpub-a");
        let id = snap.meta.id.clone();
        store.insert_wallet(snap);

        store.open_wallet(&id).await.unwrap();
        assert_eq!(store.open_wallet_id(), Some(id));

        store.close_wallet().await.unwrap();
        assert_eq!(store.open_wallet_id(), None);
    }

    #[tokio::test]
    async fn opening_unknown_wallet_fails() {
        let store = MemoryWalletStoreHandler::new();
        let missing = WalletId::derive(b"missing");
        assert!(store.open_wallet(&missing).await.is_err());
    }

    #[tokio::test]
    async fn flawed_detection_is_scripted() {
        let store = MemoryWalletStoreHandler::new();
        let snap = snapshot(b"xpub-a");
        let id = snap.meta.id.clone();
        store.insert_wallet(snap);

        assert!(!store.detect_flawed_wallet(&id).await.unwrap());
        store.mark_flawed(&id);
        assert!(store.detect_flawed_wallet(&id).await.unwrap());
    }
}
