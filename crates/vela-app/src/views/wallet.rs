//! # Active Wallet View
//!
//! The sub-state of the wallet currently open in the session. Loaded when a
//! wallet is opened, fully cleared when it closes; at most one wallet is
//! active at a time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use vela_core::checksum::VisualChecksum;
use vela_core::effects::{TxRecord, WalletSnapshot};
use vela_core::identifiers::{NetworkId, TxId, WalletId, WalletScheme};
use vela_core::wallet_meta::WalletMeta;

/// State of the currently loaded wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWallet {
    /// True only while a wallet is loaded
    pub is_initialized: bool,
    /// Identifier of the loaded wallet
    pub id: Option<WalletId>,
    /// Display name, mirrored from the inventory metadata
    pub name: String,
    /// Network the wallet lives on
    pub network_id: NetworkId,
    /// Cryptographic/address scheme
    pub scheme: WalletScheme,
    /// Whether keys live on a hardware device
    pub is_hardware_backed: bool,
    /// Whether spending confirmations may use the biometric prompt
    pub is_easy_confirmation_enabled: bool,
    /// Derived fingerprint for user-facing identification
    pub checksum: VisualChecksum,
    /// Known transactions, keyed by transaction id
    pub transactions: HashMap<TxId, TxRecord>,
    /// Receive addresses derived so far
    pub external_addresses: Vec<String>,
    /// Which of those addresses have been seen on chain
    pub used_address_flags: HashMap<String, bool>,
}

impl Default for ActiveWallet {
    fn default() -> Self {
        Self {
            is_initialized: false,
            id: None,
            name: String::new(),
            network_id: NetworkId::UNDEFINED,
            scheme: WalletScheme::Cip1852,
            is_hardware_backed: false,
            is_easy_confirmation_enabled: false,
            checksum: VisualChecksum::default(),
            transactions: HashMap::new(),
            external_addresses: Vec::new(),
            used_address_flags: HashMap::new(),
        }
    }
}

impl ActiveWallet {
    /// Load a wallet from its inventory metadata and stored snapshot
    ///
    /// The receiver must already be cleared; callers reset the whole
    /// sub-state before loading the next wallet.
    pub fn load(&mut self, meta: &WalletMeta, snapshot: WalletSnapshot) {
        self.is_initialized = true;
        self.id = Some(meta.id.clone());
        self.name = meta.name.clone();
        self.network_id = meta.network_id;
        self.scheme = meta.scheme;
        self.is_hardware_backed = meta.is_hardware_backed;
        self.is_easy_confirmation_enabled = meta.is_easy_confirmation_enabled;
        self.checksum = meta.checksum.clone();
        self.external_addresses = snapshot.external_addresses;
        self.used_address_flags = snapshot.used_address_flags;
    }

    /// Reset to the unloaded state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the given wallet is the one currently loaded
    ///
    /// The stale-result guard for in-flight fetches: results tagged with a
    /// wallet id that no longer matches are discarded.
    pub fn matches(&self, id: &WalletId) -> bool {
        self.is_initialized && self.id.as_ref() == Some(id)
    }

    /// Merge a fetched history page into the known transactions
    ///
    /// Incremental and idempotent: records are keyed by transaction id, so
    /// re-applying the same page leaves the set unchanged, and newer records
    /// for a known id (e.g. a higher confirmation depth) replace the old
    /// entry rather than duplicating it.
    pub fn merge_transactions(&mut self, records: Vec<TxRecord>) {
        for record in records {
            self.transactions.insert(record.id.clone(), record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vela_core::effects::TxDirection;

    fn record(id: &str, confirmations: u32) -> TxRecord {
        TxRecord {
            id: TxId(id.to_string()),
            direction: TxDirection::Received,
            amount: 1_000_000,
            submitted_at: Utc.with_ymd_and_hms(2021, 9, 1, 0, 0, 0).unwrap(),
            confirmations,
        }
    }

    #[test]
    fn merge_is_idempotent() {
        let mut wallet = ActiveWallet::default();
        let page = vec![record("tx-a", 1), record("tx-b", 2)];

        wallet.merge_transactions(page.clone());
        let once = wallet.transactions.clone();
        wallet.merge_transactions(page);

        assert_eq!(wallet.transactions, once);
        assert_eq!(wallet.transactions.len(), 2);
    }

    #[test]
    fn merge_updates_known_records_in_place() {
        let mut wallet = ActiveWallet::default();
        wallet.merge_transactions(vec![record("tx-a", 1)]);
        wallet.merge_transactions(vec![record("tx-a", 12)]);

        assert_eq!(wallet.transactions.len(), 1);
        assert_eq!(wallet.transactions[&TxId("tx-a".into())].confirmations, 12);
    }

    #[test]
    fn clear_resets_everything() {
        let mut wallet = ActiveWallet::default();
        wallet.merge_transactions(vec![record("tx-a", 1)]);
        wallet.is_initialized = true;
        wallet.clear();
        assert_eq!(wallet, ActiveWallet::default());
    }
}
