//! Argon2id password derivation and verification.
//!
//! Stored hashes are PHC strings, so the salt and cost parameters travel
//! with each record. Verification for unknown usernames runs against a
//! fixed dummy hash so response timing does not reveal which usernames
//! exist.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use rand::rngs::OsRng;
use secrecy::{ExposeSecret, SecretString};

// Argon2id v19, m=19456 KiB, t=2, p=1 over a zero digest. Never matches
// any password; exists only to equalize verification cost.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Derive a PHC-format Argon2id hash with a fresh random salt.
pub fn hash_password(plaintext: &SecretString) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.expose_secret().as_bytes(), &salt)
        .map_err(|err| anyhow!("failed to hash password: {err}"))?
        .to_string();
    Ok(hash)
}

/// Verify a plaintext against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
pub fn verify_password(plaintext: &SecretString, stored_hash: &str) -> Result<bool> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|err| anyhow!("invalid stored hash: {err}"))?;
    Ok(Argon2::default()
        .verify_password(plaintext.expose_secret().as_bytes(), &parsed)
        .is_ok())
}

/// Burn the same amount of CPU as a real verification for a username we
/// do not have on record.
pub fn verify_against_dummy(plaintext: &SecretString) {
    let _ = verify_password(plaintext, DUMMY_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn hash_then_verify_succeeds() {
        let password = secret("correct horse battery staple");
        let hash = hash_password(&password).unwrap();
        assert!(verify_password(&password, &hash).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password(&secret("right")).unwrap();
        assert!(!verify_password(&secret("wrong"), &hash).unwrap());
    }

    #[test]
    fn hash_never_equals_plaintext() {
        let password = secret("hunter2hunter2");
        let hash = hash_password(&password).unwrap();
        assert_ne!(hash, "hunter2hunter2");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn same_password_hashes_differently_but_both_verify() {
        // Per-record random salt means the PHC strings differ.
        let password = secret("repeatable");
        let first = hash_password(&password).unwrap();
        let second = hash_password(&password).unwrap();
        assert_ne!(first, second);
        assert!(verify_password(&password, &first).unwrap());
        assert!(verify_password(&password, &second).unwrap());
    }

    #[test]
    fn dummy_hash_parses_and_never_matches() {
        assert!(PasswordHash::new(DUMMY_HASH).is_ok());
        assert!(!verify_password(&secret("anything"), DUMMY_HASH).unwrap());
    }
}
