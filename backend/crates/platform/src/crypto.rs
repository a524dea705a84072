//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate a fixed-size array of cryptographically secure random bytes
pub fn random_array<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_array() {
        let a: [u8; 32] = random_array();
        let b: [u8; 32] = random_array();
        // Should not be all zeros, nor repeat (statistically)
        assert!(a.iter().any(|&x| x != 0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_base64_known_value() {
        assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
    }

    #[test]
    fn test_from_base64_rejects_garbage() {
        assert!(from_base64("not base64!").is_err());
    }
}
