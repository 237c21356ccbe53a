//! # Biometric Recovery Handler
//!
//! Reacts to the outcome of a biometric unlock attempt while the app is in
//! the BiometricUnlock sub-mode. The platform-backed sign-in key is bound
//! to the device credential set, so resetting device credentials silently
//! invalidates it; this handler detects that case and re-provisions the key
//! under the stable installation alias.
//!
//! The handler performs side effects (key re-provisioning, dialog
//! presentation) but never sets `is_authenticated` itself: only the caller
//! may dispatch the authentication-succeeded event, and only for a
//! [`UnlockOutcome::Success`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use vela_core::effects::{DialogEffects, ErrorDialog, KeyStoreEffects};
use vela_core::errors::VelaError;
use vela_core::identifiers::InstallationId;

/// Why a biometric unlock attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnlockFailure {
    /// The platform rejected the bound key (commonly after a device
    /// credential reset)
    InvalidKey,
    /// The user dismissed the prompt
    UserCancelled,
    /// Biometric hardware is temporarily unavailable
    HardwareUnavailable,
    /// Any other platform failure
    Other,
}

/// Outcome of one biometric unlock attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnlockOutcome {
    /// The platform verified the user
    Success,
    /// The attempt failed
    Failure(UnlockFailure),
}

/// What the handler did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecoveryAction {
    /// Verified: the caller may dispatch authentication-succeeded
    SigninAuthorized,
    /// The invalidated key was replaced; the user can retry the prompt
    KeysReprovisioned,
    /// Biometric unlock cannot be restored on this device; a blocking
    /// error was acknowledged by the user
    BiometricsUnavailable,
    /// The user cancelled; nothing surfaced, prompt stays up
    Dismissed,
    /// A non-blocking error was surfaced; no automatic retry
    ErrorSurfaced,
}

/// Handler for biometric unlock outcomes
pub struct BiometricRecoveryHandler {
    keystore: Arc<dyn KeyStoreEffects>,
    dialogs: Arc<dyn DialogEffects>,
}

impl BiometricRecoveryHandler {
    /// Create a handler over the platform key store and dialog surface
    pub fn new(keystore: Arc<dyn KeyStoreEffects>, dialogs: Arc<dyn DialogEffects>) -> Self {
        Self { keystore, dialogs }
    }

    /// Handle one unlock outcome
    pub async fn handle(
        &self,
        outcome: UnlockOutcome,
        installation_id: &InstallationId,
    ) -> Result<RecoveryAction, VelaError> {
        match outcome {
            UnlockOutcome::Success => Ok(RecoveryAction::SigninAuthorized),

            UnlockOutcome::Failure(UnlockFailure::InvalidKey) => {
                tracing::info!(%installation_id, "sign-in key invalidated, attempting recovery");
                if self.keystore.can_biometric_encryption_be_enabled().await? {
                    // Idempotent: a second re-provisioning of the same alias
                    // is safe and leaves a usable key either way.
                    self.keystore.recreate_signin_keys(installation_id).await?;
                    tracing::info!(%installation_id, "sign-in key re-provisioned");
                    Ok(RecoveryAction::KeysReprovisioned)
                } else {
                    self.dialogs
                        .show_error(ErrorDialog::BiometricsTurnedOff)
                        .await?;
                    Ok(RecoveryAction::BiometricsUnavailable)
                }
            }

            UnlockOutcome::Failure(UnlockFailure::UserCancelled) => Ok(RecoveryAction::Dismissed),

            UnlockOutcome::Failure(UnlockFailure::HardwareUnavailable) => {
                self.dialogs
                    .show_error(ErrorDialog::BiometricHardwareUnavailable)
                    .await?;
                Ok(RecoveryAction::ErrorSurfaced)
            }

            UnlockOutcome::Failure(UnlockFailure::Other) => {
                self.dialogs.show_error(ErrorDialog::UnlockFailed).await?;
                Ok(RecoveryAction::ErrorSurfaced)
            }
        }
    }
}
