//! Platform Key Store Effects Trait Definitions
//!
//! Interface to the platform-backed key store that holds the biometric-bound
//! sign-in key (Android Keystore, iOS Secure Enclave). The key is bound to
//! the device credential set: resetting device credentials invalidates it,
//! which is the condition the biometric recovery flow repairs.
//!
//! Implementations must make `recreate_signin_keys` idempotent: the
//! recovery flow may re-provision an alias that was already re-provisioned
//! by a racing attempt, and both calls must leave a usable key behind.

use async_trait::async_trait;

use crate::errors::VelaError;
use crate::identifiers::InstallationId;

/// Key store operation error
pub type KeyStoreError = VelaError;

/// Platform key store interface
#[async_trait]
pub trait KeyStoreEffects: Send + Sync {
    /// Whether the device has biometric hardware at all
    async fn is_biometric_hardware_supported(&self) -> Result<bool, KeyStoreError>;

    /// Whether biometric-backed encryption can currently be provisioned
    ///
    /// Distinct from hardware support: hardware may be present but unusable
    /// (no enrolled biometrics, OS policy, outdated key-store version).
    async fn can_biometric_encryption_be_enabled(&self) -> Result<bool, KeyStoreError>;

    /// Generate and bind a new sign-in key under the installation's alias,
    /// replacing any invalidated key
    ///
    /// Idempotent: calling twice with the same installation id is safe and
    /// yields a usable key either time.
    async fn recreate_signin_keys(
        &self,
        installation_id: &InstallationId,
    ) -> Result<(), KeyStoreError>;

    /// Remove the sign-in key for this install, if present
    async fn delete_signin_keys(
        &self,
        installation_id: &InstallationId,
    ) -> Result<(), KeyStoreError>;
}
