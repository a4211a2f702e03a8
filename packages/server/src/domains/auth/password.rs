//! Argon2 password hashing.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::common::AppError;
use crate::kernel::BasePasswordHasher;

/// PHC-string Argon2 hashes with default parameters and a random salt per password.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl BasePasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow!("Failed to hash password: {}", e))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Hash off the async runtime. CPU-intensive, use spawn_blocking.
pub async fn hash_password(
    hasher: &Arc<dyn BasePasswordHasher>,
    password: &str,
) -> Result<String, AppError> {
    let hasher = Arc::clone(hasher);
    let password = password.to_string();
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .context("Password hashing task failed")??;
    Ok(hash)
}

/// Verify off the async runtime
pub async fn verify_password(
    hasher: &Arc<dyn BasePasswordHasher>,
    password: &str,
    hash: &str,
) -> Result<bool, AppError> {
    let hasher = Arc::clone(hasher);
    let password = password.to_string();
    let hash = hash.to_string();
    let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .context("Password verification task failed")?;
    Ok(verified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher;
        let hash = hasher.hash("admin123").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("admin123", &hash));
        assert!(!hasher.verify("admin124", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = Argon2PasswordHasher;
        assert_ne!(hasher.hash("pw").unwrap(), hasher.hash("pw").unwrap());
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!Argon2PasswordHasher.verify("pw", "not-a-phc-string"));
    }

    #[tokio::test]
    async fn test_blocking_helpers_hash_and_verify() {
        let hasher: Arc<dyn BasePasswordHasher> = Arc::new(Argon2PasswordHasher);
        let hash = hash_password(&hasher, "admin123").await.unwrap();

        assert!(verify_password(&hasher, "admin123", &hash).await.unwrap());
        assert!(!verify_password(&hasher, "admin124", &hash).await.unwrap());
    }
}
