//! Deterministic key derivation for translation units.
//!
//! Keys are minted from `(source, context)` on encode and recomputed on
//! decode; a mismatch means the document was tampered with or belongs to
//! a different record set, and the unit is rejected.

use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Derives the stable identifier for a `(source, context)` pair.
///
/// SHA-256 over the source bytes, a 0x1F unit separator, and the context
/// bytes, truncated to the first 16 digest bytes and rendered as 32
/// lowercase hex characters. The separator keeps pairs like
/// `("ab", "c")` and `("a", "bc")` distinct.
pub fn generate_key(source: &str, context: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    hasher.update([0x1f]);
    hasher.update(context.as_bytes());
    let digest = hasher.finalize();

    let mut key = String::with_capacity(32);
    for byte in &digest[..16] {
        // Writing to a String cannot fail.
        let _ = write!(key, "{:02x}", byte);
    }
    key
}
