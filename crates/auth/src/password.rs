//! Password hashing - SHA-256 hex digests
//!
//! Good enough for a single-process demo bank; a real deployment would
//! use a memory-hard KDF instead.

use sha2::{Digest, Sha256};

/// Hash a plaintext password to a lowercase hex digest.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}

/// Compare a plaintext password against a stored digest.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    hash_password(plain) == hashed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_password("secret1"), hash_password("secret1"));
        assert_ne!(hash_password("secret1"), hash_password("secret2"));
    }

    #[test]
    fn verify_matches_only_the_right_password() {
        let stored = hash_password("hunter22");
        assert!(verify_password("hunter22", &stored));
        assert!(!verify_password("hunter2", &stored));
    }

    #[test]
    fn digest_is_hex_of_expected_length() {
        let digest = hash_password("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
