//! Core identifier types used across the Vela session core
//!
//! These types uniquely identify wallets, installations, networks and
//! transactions. They are plain data: serializable, comparable, and safe to
//! hand across an FFI boundary.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::VelaError;

/// Wallet identifier
///
/// Stable and content-derived: computed from the wallet's public account
/// material at creation time, so re-importing the same wallet yields the
/// same id on any device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WalletId(String);

impl WalletId {
    /// Derive a wallet id from public account material
    pub fn derive(account_material: &[u8]) -> Self {
        let digest: [u8; 32] = Sha256::digest(account_material).into();
        Self(hex::encode(&digest[..20]))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WalletId {
    type Err = VelaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(VelaError::invalid(format!("malformed wallet id: {s}")));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

/// Transaction identifier, as reported by the chain backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxId(pub String);

impl TxId {
    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable per-install identifier
///
/// Generated once at first launch and kept for the lifetime of the install.
/// Used as the key-store alias for the biometric-bound signing key, so key
/// re-provisioning always targets the same alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstallationId(pub Uuid);

impl InstallationId {
    /// Create a new random installation id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Key-store alias for the signing key bound to this install
    pub fn key_alias(&self) -> String {
        format!("vela-signin-{}", self.0)
    }
}

impl fmt::Display for InstallationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "install-{}", self.0)
    }
}

impl From<Uuid> for InstallationId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Network registry identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub u32);

impl NetworkId {
    /// Main production network
    pub const MAINNET: NetworkId = NetworkId(1);
    /// Public test network
    pub const TESTNET: NetworkId = NetworkId(300);
    /// Placeholder before a wallet is loaded
    pub const UNDEFINED: NetworkId = NetworkId(u32::MAX);
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "network-{}", self.0)
    }
}

/// Cryptographic/address scheme of a wallet
///
/// Selects key derivation and address format, and gates the features a
/// wallet participates in (delegation, governance voting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletScheme {
    /// Current hierarchical scheme; supports delegation and governance voting
    Cip1852,
    /// Legacy pre-delegation scheme, kept for imported wallets
    Bip44Legacy,
}

impl WalletScheme {
    /// Whether wallets of this scheme can register for governance voting
    pub fn supports_voting(&self) -> bool {
        matches!(self, Self::Cip1852)
    }

    /// Whether this is a legacy scheme (drives the migration warning banner)
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Bip44Legacy)
    }
}
