//! Key Store Effect Handlers
//!
//! Two handlers for the platform key store interface:
//!
//! - [`MemoryKeyStoreHandler`] emulates a hardware-backed key store in
//!   memory, including key invalidation after a device credential reset.
//!   Used by tests and headless hosts.
//! - [`FallbackKeyStoreHandler`] is the null-object handler for platforms
//!   without biometric hardware: every capability check answers "no".
//!
//! Production shells implement [`KeyStoreEffects`] against the platform
//! APIs (Android Keystore, iOS Secure Enclave).

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;

use vela_core::effects::{KeyStoreEffects, KeyStoreError};
use vela_core::identifiers::InstallationId;

#[derive(Debug, Default)]
struct MemoryKeyStoreState {
    hardware_supported: bool,
    can_enable: bool,
    provisioned: HashSet<String>,
}

/// In-memory emulation of a hardware-backed key store
#[derive(Debug)]
pub struct MemoryKeyStoreHandler {
    state: Mutex<MemoryKeyStoreState>,
}

impl MemoryKeyStoreHandler {
    /// Create a handler emulating a device with usable biometrics
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryKeyStoreState {
                hardware_supported: true,
                can_enable: true,
                provisioned: HashSet::new(),
            }),
        }
    }

    /// Simulate a platform state change (biometrics enrolled/removed, OS
    /// policy) that flips whether encryption can be provisioned
    pub fn set_can_enable(&self, can_enable: bool) {
        self.state.lock().can_enable = can_enable;
    }

    /// Simulate a device credential reset: all provisioned keys become
    /// invalid and disappear from the store
    pub fn invalidate_all_keys(&self) {
        self.state.lock().provisioned.clear();
    }

    /// Whether a usable sign-in key exists for this install
    pub fn has_signin_keys(&self, installation_id: &InstallationId) -> bool {
        self.state
            .lock()
            .provisioned
            .contains(&installation_id.key_alias())
    }
}

impl Default for MemoryKeyStoreHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyStoreEffects for MemoryKeyStoreHandler {
    async fn is_biometric_hardware_supported(&self) -> Result<bool, KeyStoreError> {
        Ok(self.state.lock().hardware_supported)
    }

    async fn can_biometric_encryption_be_enabled(&self) -> Result<bool, KeyStoreError> {
        let state = self.state.lock();
        Ok(state.hardware_supported && state.can_enable)
    }

    async fn recreate_signin_keys(
        &self,
        installation_id: &InstallationId,
    ) -> Result<(), KeyStoreError> {
        let mut state = self.state.lock();
        if !state.can_enable {
            return Err(KeyStoreError::keystore(
                "biometric encryption cannot be provisioned",
            ));
        }
        // Replacing an existing alias is the idempotent path the recovery
        // flow depends on.
        state.provisioned.insert(installation_id.key_alias());
        Ok(())
    }

    async fn delete_signin_keys(
        &self,
        installation_id: &InstallationId,
    ) -> Result<(), KeyStoreError> {
        self.state
            .lock()
            .provisioned
            .remove(&installation_id.key_alias());
        Ok(())
    }
}

/// Null-object key store for platforms without biometric hardware
///
/// All capability checks answer "no" and provisioning fails with a
/// descriptive error, so code paths run unchanged on servers, CI and
/// development machines without sensors.
#[derive(Debug, Default)]
pub struct FallbackKeyStoreHandler;

impl FallbackKeyStoreHandler {
    /// Create a new fallback handler
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeyStoreEffects for FallbackKeyStoreHandler {
    async fn is_biometric_hardware_supported(&self) -> Result<bool, KeyStoreError> {
        Ok(false)
    }

    async fn can_biometric_encryption_be_enabled(&self) -> Result<bool, KeyStoreError> {
        Ok(false)
    }

    async fn recreate_signin_keys(
        &self,
        _installation_id: &InstallationId,
    ) -> Result<(), KeyStoreError> {
        Err(KeyStoreError::keystore(
            "biometric hardware not available in fallback handler",
        ))
    }

    async fn delete_signin_keys(
        &self,
        _installation_id: &InstallationId,
    ) -> Result<(), KeyStoreError> {
        // Nothing stored in this handler
        Ok(())
    }
}
