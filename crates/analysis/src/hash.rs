//! Content fingerprinting

use sha2::{Digest, Sha256};

/// Lowercase-hex SHA-256 of the UTF-8 bytes of `text`.
/// Serves as both the storage key and the externally visible record id.
pub fn fingerprint(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
