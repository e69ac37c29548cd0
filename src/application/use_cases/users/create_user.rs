//! Create User Use Case

use std::sync::Arc;

use crate::domain::gateways::{PasswordHasher, UserRepository};
use crate::domain::models::user::{CreateUserData, User, UserRole};
use crate::shared::errors::UseCaseError;

/// A new account with its plain-text password
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Use case for creating a back-office account
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if the email is already taken.
    /// Returns `UseCaseError::Domain` if a required field is blank.
    pub async fn execute(&self, new_user: NewUser) -> Result<User, UseCaseError> {
        let email = new_user.email.trim().to_lowercase();
        tracing::info!(email = %email, role = %new_user.role, "Creating new user");

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(UseCaseError::Conflict(format!("email '{email}' is already in use")));
        }

        let password_hash = self.password_hasher.hash(&new_user.password)?;
        let user = User::new(CreateUserData {
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email,
            password_hash,
            role: new_user.role,
        })?;
        let created = self.user_repository.create(&user).await?;

        tracing::info!(user_id = %created.id(), "User created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::password_hasher::MockPasswordHasher;
    use crate::domain::gateways::user_repository::MockUserRepository;

    fn new_user() -> NewUser {
        NewUser {
            first_name: "Samir".to_string(),
            last_name: "Haddad".to_string(),
            email: " Samir@School.dz ".to_string(),
            password: "s3cret-pass".to_string(),
            role: UserRole::Staff,
        }
    }

    #[tokio::test]
    async fn should_hash_password_and_lowercase_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "samir@school.dz")
            .returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|u| Ok(u.clone()));
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .withf(|p| p == "s3cret-pass")
            .returning(|_| Ok("$argon2id$hash".to_string()));

        let use_case = CreateUserUseCase::new(Arc::new(repo), Arc::new(hasher));
        let user = use_case.execute(new_user()).await.unwrap();

        assert_eq!(user.email(), "samir@school.dz");
        assert_eq!(user.password_hash(), "$argon2id$hash");
        assert!(user.is_active());
    }

    #[tokio::test]
    async fn should_reject_duplicate_email() {
        let existing = User::new(CreateUserData {
            first_name: "Other".into(),
            last_name: "User".into(),
            email: "samir@school.dz".into(),
            password_hash: "hash".into(),
            role: UserRole::Admin,
        })
        .unwrap();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let use_case = CreateUserUseCase::new(Arc::new(repo), Arc::new(hasher));
        let result = use_case.execute(new_user()).await;

        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
    }
}
