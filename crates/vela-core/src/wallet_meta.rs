//! Wallet metadata
//!
//! The device-level record of a wallet: everything the app needs to list,
//! identify and open it, independent of whether it is currently loaded.

use serde::{Deserialize, Serialize};

use crate::checksum::VisualChecksum;
use crate::identifiers::{NetworkId, WalletId, WalletScheme};

/// Device inventory entry for one wallet
///
/// Immutable once created, except `name` and
/// `is_easy_confirmation_enabled`, which the user may change. Removed from
/// the inventory on wallet deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletMeta {
    /// Stable, content-derived identifier
    pub id: WalletId,
    /// User-chosen display name
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
}

impl WalletMeta {
    /// Create metadata for a new wallet, deriving id and checksum from the
    /// public account material
    pub fn new(
        name: impl Into<String>,
        network_id: NetworkId,
        scheme: WalletScheme,
        is_hardware_backed: bool,
        account_material: &[u8],
    ) -> Self {
        let id = WalletId::derive(account_material);
        let checksum = VisualChecksum::derive(&id);
        Self {
            id,
            name: name.into(),
            network_id,
            scheme,
            is_hardware_backed,
            is_easy_confirmation_enabled: false,
            checksum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wallet_meta_derives_id_and_checksum() {
        let meta = WalletMeta::new(
            "Savings",
            NetworkId::MAINNET,
            WalletScheme::Cip1852,
            false,
            b"account-xpub-0",
        );
        assert_eq!(meta.id, WalletId::derive(b"account-xpub-0"));
        assert_eq!(meta.checksum, VisualChecksum::derive(&meta.id));
        assert!(!meta.is_easy_confirmation_enabled);
    }

    #[test]
    fn wallet_meta_round_trips_through_json() {
        let meta = WalletMeta::new(
            "Savings",
            NetworkId::TESTNET,
            WalletScheme::Bip44Legacy,
            true,
            b"account-xpub-1",
        );
        let json = serde_json::to_string(&meta).expect("meta should serialize");
        let back: WalletMeta = serde_json::from_str(&json).expect("meta should deserialize");
        assert_eq!(meta, back);
    }
}
