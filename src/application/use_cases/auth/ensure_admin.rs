//! Ensure Admin Use Case
//!
//! Seeds the first administrator account on an empty database.

use std::sync::Arc;

use crate::domain::gateways::{PasswordHasher, UserRepository};
use crate::domain::models::user::{CreateUserData, User, UserRole};
use crate::shared::errors::UseCaseError;

/// Credentials of the account created on first start
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct EnsureAdminUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl EnsureAdminUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Execute the use case
    ///
    /// Returns the created admin, or `None` when users already exist.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, seed: AdminSeed) -> Result<Option<User>, UseCaseError> {
        if self.user_repository.count().await? > 0 {
            return Ok(None);
        }

        let user = User::new(CreateUserData {
            first_name: seed.first_name,
            last_name: seed.last_name,
            email: seed.email,
            password_hash: self.password_hasher.hash(&seed.password)?,
            role: UserRole::Admin,
        })?;
        let created = self.user_repository.create(&user).await?;

        tracing::info!(user_id = %created.id(), email = %created.email(), "Bootstrap administrator created");
        Ok(Some(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::password_hasher::MockPasswordHasher;
    use crate::domain::gateways::user_repository::MockUserRepository;

    fn seed() -> AdminSeed {
        AdminSeed {
            email: "admin@school.dz".into(),
            password: "change-me".into(),
            first_name: "Admin".into(),
            last_name: "School".into(),
        }
    }

    #[tokio::test]
    async fn should_seed_admin_on_empty_database() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_create().times(1).returning(|u| Ok(u.clone()));
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().returning(|_| Ok("hash".into()));

        let created = EnsureAdminUseCase::new(Arc::new(repo), Arc::new(hasher))
            .execute(seed())
            .await
            .unwrap();

        assert_eq!(created.map(|u| u.role()), Some(UserRole::Admin));
    }

    #[tokio::test]
    async fn should_do_nothing_when_users_exist() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().returning(|| Ok(3));
        repo.expect_create().never();

        let created = EnsureAdminUseCase::new(Arc::new(repo), Arc::new(MockPasswordHasher::new()))
            .execute(seed())
            .await
            .unwrap();

        assert!(created.is_none());
    }
}
