//! Checksums for migration SQL

use sha2::{Digest, Sha256};

/// SHA256 of the migration text, hex-encoded
pub fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
