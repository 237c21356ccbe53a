//! Error Dialog Effects Trait Definitions
//!
//! User-visible failure surfaces. The session core decides *which* dialog a
//! failure maps to and whether it blocks; the shell renders it. A blocking
//! dialog's `show_error` future resolves only once the user acknowledges.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::VelaError;

/// Dialog presentation error
pub type DialogError = VelaError;

/// How a dialog interrupts the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogSeverity {
    /// Modal, requires acknowledgement before the flow continues
    Blocking,
    /// Banner/toast, dismissable, flow continues underneath
    Banner,
}

/// Error dialogs the session core can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorDialog {
    /// Biometric unlock is no longer available on this device
    BiometricsTurnedOff,
    /// Biometric hardware is temporarily unavailable
    BiometricHardwareUnavailable,
    /// Unlock failed for an unclassified reason
    UnlockFailed,
}

impl ErrorDialog {
    /// Severity this dialog is presented with
    pub fn severity(&self) -> DialogSeverity {
        match self {
            Self::BiometricsTurnedOff => DialogSeverity::Blocking,
            Self::BiometricHardwareUnavailable => DialogSeverity::Banner,
            Self::UnlockFailed => DialogSeverity::Banner,
        }
    }
}

/// Dialog presentation interface
#[async_trait]
pub trait DialogEffects: Send + Sync {
    /// Present an error dialog
    ///
    /// For [`DialogSeverity::Blocking`] dialogs the returned future resolves
    /// when the user acknowledges; for banners it resolves once presented.
    async fn show_error(&self, dialog: ErrorDialog) -> Result<(), DialogError>;
}
