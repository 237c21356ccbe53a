//! Visual wallet checksum
//!
//! A derived fingerprint shown next to a wallet so users can tell similar
//! wallets apart at a glance. Deterministic over the wallet id: the same
//! wallet renders the same checksum on every device.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::identifiers::WalletId;

/// User-facing wallet fingerprint
///
/// `image_part` seeds the identicon renderer; `text_part` is the short
/// human-readable form (`XXXX-0000`) printed beside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualChecksum {
    /// Hex seed for the identicon renderer
    pub image_part: String,
    /// Short textual form, four letters and four digits
    pub text_part: String,
}

impl VisualChecksum {
    /// Derive the checksum for a wallet id
    pub fn derive(wallet_id: &WalletId) -> Self {
        let first: [u8; 32] = Sha256::digest(wallet_id.as_str().as_bytes()).into();
        let second: [u8; 32] = Sha256::digest(first).into();

        let mut image = hex::encode(first);
        image.push_str(&hex::encode(second));

        let letters: String = first[..4]
            .iter()
            .map(|b| char::from(b'A' + (b % 26)))
            .collect();
        let number = u16::from_be_bytes([first[4], first[5]]) % 10_000;

        Self {
            image_part: image,
            text_part: format!("{letters}-{number:04}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_deterministic() {
        let id = WalletId::derive(b"account-xpub-0");
        assert_eq!(VisualChecksum::derive(&id), VisualChecksum::derive(&id));
    }

    #[test]
    fn distinct_wallets_get_distinct_checksums() {
        let a = VisualChecksum::derive(&WalletId::derive(b"account-xpub-0"));
        let b = VisualChecksum::derive(&WalletId::derive(b"account-xpub-1"));
        assert_ne!(a.text_part, b.text_part);
        assert_ne!(a.image_part, b.image_part);
    }

    #[test]
    fn text_part_has_display_shape() {
        let checksum = VisualChecksum::derive(&WalletId::derive(b"account-xpub-0"));
        let (letters, digits) = checksum
            .text_part
            .split_once('-')
            .expect("text part should contain a dash");
        assert_eq!(letters.len(), 4);
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(digits.len(), 4);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn image_part_is_long_enough_for_the_renderer() {
        let checksum = VisualChecksum::derive(&WalletId::derive(b"account-xpub-0"));
        assert_eq!(checksum.image_part.len(), 128);
    }
}
