#![deny(unsafe_code)]

use sha2::Digest;

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

/// Compare content against a pinned digest (case-insensitive hex).
pub fn matches_sha256(bytes: &[u8], expected: &str) -> bool {
    sha256_hex(bytes) == expected.to_ascii_lowercase()
}
