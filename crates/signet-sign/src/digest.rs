//! MD5 hex digest used as the signature wire format

use md5::{Digest, Md5};
use std::fmt::Write;

/// Digest raw bytes to a 32-character lowercase hex string
///
/// # Example
///
/// ```rust
/// use signet_sign::md5_hex;
///
/// let digest = md5_hex(b"abc");
/// assert_eq!(digest, "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    let digest = hasher.finalize();

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}

/// Validate the signature wire format: exactly 32 lowercase hex chars
pub fn is_valid_signature(s: &str) -> bool {
    s.len() == 32 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Constant-time string comparison to prevent timing attacks
pub(crate) fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
