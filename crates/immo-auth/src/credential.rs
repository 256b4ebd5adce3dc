//! Password digests.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// SHA-256 of the password, lowercase hex.
#[must_use]
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check `plaintext` against a stored digest without leaking timing
/// information about where the digests differ.
#[must_use]
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    digests_match(&hash_password(plaintext), stored_hash)
}

/// Constant-time digest comparison.
#[must_use]
pub fn digests_match(candidate: &str, stored: &str) -> bool {
    candidate.as_bytes().ct_eq(stored.as_bytes()).into()
}
