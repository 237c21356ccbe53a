//! PIN credential hashing
//!
//! The custom PIN is never stored in clear: only a salted digest is kept in
//! session state and settings storage. Verification is constant-time.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Salt length for PIN digests
const PIN_SALT_LEN: usize = 16;

/// Salted digest of a user PIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinHash {
    salt: String,
    digest: String,
}

impl PinHash {
    /// Derive a PIN hash with the given salt
    ///
    /// The salt comes from the host platform's RNG; passing the same salt
    /// and PIN always yields the same hash, which storage round-trips rely
    /// on.
    pub fn derive(pin: &str, salt: [u8; PIN_SALT_LEN]) -> Self {
        Self {
            salt: hex::encode(salt),
            digest: hex::encode(Self::digest_with_salt(pin, &salt)),
        }
    }

    /// Verify a PIN attempt in constant time
    pub fn verify(&self, pin: &str) -> bool {
        let Ok(salt) = hex::decode(&self.salt) else {
            return false;
        };
        let Ok(stored) = hex::decode(&self.digest) else {
            return false;
        };
        let attempt = Self::digest_with_salt(pin, &salt);
        stored.ct_eq(&attempt).into()
    }

    fn digest_with_salt(pin: &str, salt: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(pin.as_bytes());
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_pin_verifies() {
        let hash = PinHash::derive("123456", [7u8; PIN_SALT_LEN]);
        assert!(hash.verify("123456"));
    }

    #[test]
    fn wrong_pin_is_rejected() {
        let hash = PinHash::derive("123456", [7u8; PIN_SALT_LEN]);
        assert!(!hash.verify("654321"));
        assert!(!hash.verify(""));
    }

    #[test]
    fn same_pin_different_salt_differs() {
        let a = PinHash::derive("123456", [1u8; PIN_SALT_LEN]);
        let b = PinHash::derive("123456", [2u8; PIN_SALT_LEN]);
        assert_ne!(a, b);
        assert!(a.verify("123456"));
        assert!(b.verify("123456"));
    }
}
