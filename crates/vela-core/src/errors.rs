//! Unified error type for Vela core operations
//!
//! A single enum covers every failure the session core can observe from its
//! collaborators. Effect traits alias it (`KeyStoreError`, `BackendError`)
//! so handler implementations stay decoupled from the app layer.

use serde::{Deserialize, Serialize};

/// Unified error type for all Vela operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum VelaError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was not found
        message: String,
    },

    /// Platform key store operation failed
    #[error("Key store error: {message}")]
    KeyStore {
        /// Description of the key store failure
        message: String,
    },

    /// Network or transport error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network issue
        message: String,
    },

    /// Wallet storage operation failed
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl VelaError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a key store error
    pub fn keystore(message: impl Into<String>) -> Self {
        Self::KeyStore {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check whether this error class is likely to resolve on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// Result type for Vela core operations
pub type Result<T> = std::result::Result<T, VelaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_produce_matching_variants() {
        assert!(matches!(VelaError::invalid("x"), VelaError::Invalid { .. }));
        assert!(matches!(
            VelaError::keystore("x"),
            VelaError::KeyStore { .. }
        ));
        assert!(matches!(VelaError::network("x"), VelaError::Network { .. }));
    }

    #[test]
    fn only_network_errors_are_transient() {
        assert!(VelaError::network("timeout").is_transient());
        assert!(!VelaError::storage("corrupt").is_transient());
        assert!(!VelaError::internal("bug").is_transient());
    }

    #[test]
    fn display_includes_message() {
        let err = VelaError::keystore("alias rejected by platform");
        assert_eq!(err.to_string(), "Key store error: alias rejected by platform");
    }
}
