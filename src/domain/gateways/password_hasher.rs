//! Password Hasher Gateway

use crate::shared::errors::UseCaseError;

/// Hashes and verifies user passwords
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password into a self-describing hash string
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Internal` when hashing fails.
    fn hash(&self, password: &str) -> Result<String, UseCaseError>;

    /// Check a plain-text password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}
