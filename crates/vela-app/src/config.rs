//! # App Configuration
//!
//! Build-time/host configuration, as opposed to session state: the resolver
//! consults it but events never mutate it.

use serde::{Deserialize, Serialize};

/// Static configuration supplied by the host shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start at the developer index screen for internal tooling
    ///
    /// Only honored in debug builds; release builds ignore the flag
    /// entirely, so the developer index is unreachable in production.
    pub start_with_dev_index: bool,
}

impl AppConfig {
    /// Whether the developer index override is active
    pub fn dev_index_enabled(&self) -> bool {
        cfg!(debug_assertions) && self.start_with_dev_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_index_requires_the_flag() {
        assert!(!AppConfig::default().dev_index_enabled());
    }

    #[test]
    fn dev_index_flag_is_honored_in_debug_builds() {
        let config = AppConfig {
            start_with_dev_index: true,
        };
        // Test builds carry debug assertions; release builds compile the
        // override away.
        assert_eq!(config.dev_index_enabled(), cfg!(debug_assertions));
    }
}
