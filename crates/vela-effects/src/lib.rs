//! # Vela Effects
//!
//! Handler implementations for the effect traits defined in
//! `vela_core::effects`. Everything here is in-memory and deterministic:
//! tests and headless hosts use these handlers directly, while platform
//! shells (iOS, Android) supply their own implementations against the
//! native APIs.

pub mod backend;
pub mod dialog;
pub mod keystore;
pub mod wallet_store;

pub use backend::ScriptedBackendHandler;
pub use dialog::RecordingDialogHandler;
pub use keystore::{FallbackKeyStoreHandler, MemoryKeyStoreHandler};
pub use wallet_store::MemoryWalletStoreHandler;
