//! Argon2id password hashing with a random per-password salt.
//!
//! Hashing is slow and memory-hard on purpose, so handlers go through the
//! `_blocking` variants, which run on tokio's blocking pool.

use anyhow::{anyhow, Context};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashes a password into a PHC string (`$argon2id$...`).
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
/// A malformed stored hash is an error, a mismatch is `Ok(false)`.
pub fn verify_password(password: &str, stored_hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| anyhow!("Stored password hash is malformed: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Stand-in hash checked when a login names an unknown email, so both
/// failure paths pay for one Argon2 verification. Uses the default
/// parameters; the digest is a fixed byte pattern.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$cmVzdW1lLWluc2lnaHQtMA$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

/// `hash_password` on the blocking pool.
pub async fn hash_password_blocking(password: String) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("Password hashing task failed")?
}

/// `verify_password` on the blocking pool.
pub async fn verify_password_blocking(
    password: String,
    stored_hash: String,
) -> anyhow::Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .context("Password verification task failed")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hash = hash_password("hunter22").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("hunter22"));
        assert!(verify_password("hunter22", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_hash_is_error() {
        assert!(verify_password("anything", "plaintext-password").is_err());
    }

    #[test]
    fn test_dummy_hash_is_well_formed_and_matches_nothing() {
        assert!(!verify_password("", DUMMY_PASSWORD_HASH).unwrap());
        assert!(!verify_password("hunter22", DUMMY_PASSWORD_HASH).unwrap());

        let dummy = PasswordHash::new(DUMMY_PASSWORD_HASH).unwrap();
        let real_hash = hash_password("hunter22").unwrap();
        let real = PasswordHash::new(&real_hash).unwrap();
        assert_eq!(dummy.algorithm, real.algorithm);
        assert_eq!(dummy.params, real.params);
    }

    #[tokio::test]
    async fn test_blocking_variants_hash_and_verify() {
        let hash = hash_password_blocking("hunter22".to_string()).await.unwrap();
        assert!(verify_password_blocking("hunter22".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password_blocking("hunter23".to_string(), hash)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_hashing_leaves_the_runtime_thread_free() {
        // Single-threaded runtime: if hashing ran inline, the hashing task
        // would finish before the other task got a turn.
        let hashing = tokio::spawn(hash_password_blocking("hunter22".to_string()));
        let other = tokio::spawn(async { 42 });

        assert_eq!(other.await.unwrap(), 42);
        assert!(!hashing.is_finished());
        assert!(hashing.await.unwrap().unwrap().starts_with("$argon2id$"));
    }
}
