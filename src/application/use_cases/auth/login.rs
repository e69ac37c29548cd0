//! Login Use Case

use std::sync::Arc;

use crate::domain::gateways::{PasswordHasher, UserRepository};
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Checks credentials and returns the authenticated account
pub struct LoginUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl LoginUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Execute the use case
    ///
    /// Unknown emails, wrong passwords and disabled accounts all produce the
    /// same error.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` when the credentials are rejected.
    pub async fn execute(&self, email: &str, password: &str) -> Result<User, UseCaseError> {
        let email = email.trim().to_lowercase();
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .filter(User::is_active)
            .ok_or_else(|| UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !self.password_hasher.verify(password, user.password_hash()) {
            tracing::warn!(user_id = %user.id(), "Rejected login attempt");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        tracing::info!(user_id = %user.id(), role = %user.role(), "User logged in");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::password_hasher::MockPasswordHasher;
    use crate::domain::gateways::user_repository::MockUserRepository;
    use crate::domain::models::user::{CreateUserData, UpdateUserData, UserRole};

    fn admin() -> User {
        User::new(CreateUserData {
            first_name: "Admin".into(),
            last_name: "School".into(),
            email: "admin@school.dz".into(),
            password_hash: "stored-hash".into(),
            role: UserRole::Admin,
        })
        .unwrap()
    }

    fn use_case(user: Option<User>, password_ok: bool) -> LoginUseCase {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(move |_| Ok(user.clone()));
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().returning(move |_, _| password_ok);
        LoginUseCase::new(Arc::new(repo), Arc::new(hasher))
    }

    #[tokio::test]
    async fn should_return_user_for_valid_credentials() {
        let user = use_case(Some(admin()), true)
            .execute("ADMIN@school.dz", "password")
            .await
            .unwrap();
        assert_eq!(user.role(), UserRole::Admin);
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let result = use_case(Some(admin()), false).execute("admin@school.dz", "nope").await;
        assert!(matches!(result, Err(UseCaseError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn should_reject_disabled_account() {
        let disabled = admin()
            .with_updates(UpdateUserData {
                is_active: Some(false),
                ..Default::default()
            })
            .unwrap();
        let result = use_case(Some(disabled), true).execute("admin@school.dz", "password").await;
        assert!(matches!(result, Err(UseCaseError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn should_reject_unknown_email() {
        let result = use_case(None, true).execute("ghost@school.dz", "password").await;
        assert!(matches!(result, Err(UseCaseError::Unauthorized(_))));
    }
}
