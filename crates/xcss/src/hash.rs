//! Stable hashing for class names.
//!
//! `FxHasher` is deterministic across runs and processes (no random seed),
//! so the same canonical key always yields the same class name: server and
//! client agree, and two server processes agree with each other.

use std::hash::Hasher;

use rustc_hash::FxHasher;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of base-36 digits kept in a class-name suffix.
const SUFFIX_LEN: u32 = 7;

pub fn stable_hash(input: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(input.as_bytes());
    hasher.finish()
}

pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(13);
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// A short, fixed-width base-36 digest of `key`.
pub fn class_suffix(key: &str) -> String {
    let digest = stable_hash(key) % 36u64.pow(SUFFIX_LEN);
    format!("{:0>width$}", to_base36(digest), width = SUFFIX_LEN as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn test_suffix_is_stable_and_fixed_width() {
        let a = class_suffix("text|size=lg");
        assert_eq!(a, class_suffix("text|size=lg"));
        assert_eq!(a.len(), 7);
        assert_ne!(a, class_suffix("text|size=xl"));
    }
}
