//! # Vela App
//!
//! Portable headless session core for the Vela mobile wallet. UI shells
//! bind to this crate; rendering, network transport and storage stay behind
//! the effect traits in `vela-core`.
//!
//! ## Flow
//!
//! ```text
//! Event → Dispatch (guard invariants) → SessionState → Resolve → Snapshot
//! ```
//!
//! - [`session`]: the state, events, and single-writer store
//! - [`resolver`]: pure state-snapshot → [`resolver::Mode`] decision
//! - [`recovery`]: biometric unlock failure handling and key re-provisioning
//! - [`sync`]: the post-unlock refresh pipeline
//! - [`app`]: the [`app::WalletApp`] facade shells construct

pub mod app;
pub mod config;
pub mod errors;
pub mod recovery;
pub mod resolver;
pub mod session;
pub mod sync;
pub mod views;

pub use app::WalletApp;
pub use config::AppConfig;
pub use errors::{AppError, DispatchError};
pub use recovery::{BiometricRecoveryHandler, RecoveryAction, UnlockFailure, UnlockOutcome};
pub use resolver::{
    resolve, unlocked_initial_route, FirstRunStep, Mode, UnlockScreen, UnlockedRoute,
};
pub use session::{
    SessionEvent, SessionHandle, SessionSnapshot, SessionState, SessionStore, UnlockMethod,
};
pub use sync::SyncOrchestrator;
