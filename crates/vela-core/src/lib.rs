//! # Vela Core
//!
//! Foundation types for the Vela wallet session core: identifiers, wallet
//! metadata, credential hashing, and the effect trait interfaces through
//! which the app layer reaches platform collaborators.
//!
//! This crate is pure: no runtime, no I/O. Handler implementations live in
//! `vela-effects`; the session logic lives in `vela-app`.

pub mod auth;
pub mod checksum;
pub mod effects;
pub mod errors;
pub mod identifiers;
pub mod wallet_meta;

pub use auth::PinHash;
pub use checksum::VisualChecksum;
pub use errors::{Result, VelaError};
pub use identifiers::{InstallationId, NetworkId, TxId, WalletId, WalletScheme};
pub use wallet_meta::WalletMeta;
