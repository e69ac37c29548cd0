//! Argon2 Password Hashing
//!
//! Implements the PasswordHasher port with argon2id and PHC-formatted hashes.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

use crate::domain::gateways::PasswordHasher;
use crate::shared::errors::UseCaseError;

#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, UseCaseError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UseCaseError::Internal(format!("password hash error: {e}")))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            tracing::warn!("Stored password hash could not be parsed");
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("s3cret-Pass").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("s3cret-Pass", &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn test_salts_differ() {
        let hasher = Argon2PasswordHasher::new();
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!Argon2PasswordHasher::new().verify("anything", "not-a-phc-string"));
    }
}
