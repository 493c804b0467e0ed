//! Password hashing
//!
//! Hashes are stored as `pbkdf2-sha256$<rounds>$<salt>$<key>` with base64
//! salt and key, so the round count can change without invalidating old
//! hashes.

use base64::engine::general_purpose::STANDARD as B64Engine;
use base64::Engine;
use pbkdf2::pbkdf2_hmac_array;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

const SCHEME: &str = "pbkdf2-sha256";
const KEY_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;

pub const DEFAULT_ROUNDS: u32 = 100_000;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    rounds: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

impl PasswordHasher {
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds: rounds.max(1),
        }
    }

    pub fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);
        let key = derive(password, &salt, self.rounds);
        format!(
            "{}${}${}${}",
            SCHEME,
            self.rounds,
            B64Engine.encode(salt),
            B64Engine.encode(key)
        )
    }

    /// Check `password` against an encoded hash. Malformed hashes never match.
    pub fn verify(&self, password: &str, encoded: &str) -> bool {
        let mut parts = encoded.split('$');
        let (Some(SCHEME), Some(rounds), Some(salt), Some(key), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return false;
        };

        let Ok(rounds) = rounds.parse::<u32>() else {
            return false;
        };
        let (Ok(salt), Ok(expected)) = (B64Engine.decode(salt), B64Engine.decode(key)) else {
            return false;
        };

        let actual = derive(password, &salt, rounds);
        constant_time_eq(&actual, &expected)
    }
}

#[inline]
fn derive(password: &str, salt: &[u8], rounds: u32) -> [u8; KEY_LENGTH] {
    pbkdf2_hmac_array::<Sha256, KEY_LENGTH>(password.as_bytes(), salt, rounds)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(1_000);
        let hash = hasher.hash("hunter22!");
        assert!(hash.starts_with("pbkdf2-sha256$1000$"));
        assert!(hasher.verify("hunter22!", &hash));
        assert!(!hasher.verify("hunter23!", &hash));
    }

    #[test]
    fn test_salt_differs() {
        let hasher = PasswordHasher::new(1_000);
        assert_ne!(hasher.hash("same-password"), hasher.hash("same-password"));
    }

    #[test]
    fn test_verify_uses_stored_rounds() {
        let old = PasswordHasher::new(500).hash("hunter22!");
        assert!(PasswordHasher::new(2_000).verify("hunter22!", &old));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let hasher = PasswordHasher::new(1_000);
        assert!(!hasher.verify("x", ""));
        assert!(!hasher.verify("x", "plain-text"));
        assert!(!hasher.verify("x", "pbkdf2-sha256$abc$AAAA$AAAA"));
        assert!(!hasher.verify("x", "md5$1$AAAA$AAAA"));
    }
}
