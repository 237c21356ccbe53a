//! # Session Module
//!
//! State, events and the store that ties them together:
//!
//! - [`SessionState`]: the process-wide state snapshot
//! - [`SessionEvent`]: every mutation, as data
//! - [`SessionStore`]: the single dispatch path (guard → apply → resolve →
//!   publish)
//! - [`SessionHandle`]: serialized dispatch for concurrent async callers

mod event;
mod state;
mod store;

pub use event::{SessionEvent, UnlockMethod};
pub use state::{ServerStatusCache, SessionState, Settings};
pub use store::{spawn_dispatcher, SessionHandle, SessionSnapshot, SessionStore};
