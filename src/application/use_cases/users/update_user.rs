//! Update User Use Case

use std::sync::Arc;

use crate::domain::gateways::{PasswordHasher, UserRepository};
use crate::domain::models::ids::UserId;
use crate::domain::models::user::{UpdateUserData, User, UserRole};
use crate::shared::errors::UseCaseError;

/// Account changes; a new password arrives in plain text
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

pub struct UpdateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserUseCase {
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
    /// Returns `UseCaseError::NotFound` if the user doesn't exist.
    /// Returns `UseCaseError::Conflict` if the new email belongs to another user.
    pub async fn execute(&self, id: &UserId, changes: UserChanges) -> Result<User, UseCaseError> {
        tracing::info!(user_id = %id, "Updating user");

        let existing = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User", id))?;

        let email = changes.email.map(|e| e.trim().to_lowercase());
        if let Some(email) = email.as_deref().filter(|e| *e != existing.email()) {
            if let Some(owner) = self.user_repository.find_by_email(email).await? {
                if owner.id() != id {
                    return Err(UseCaseError::Conflict(format!("email '{email}' is already in use")));
                }
            }
        }

        let password_hash = match changes.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => Some(self.password_hasher.hash(password)?),
            None => None,
        };

        let updated = existing.with_updates(UpdateUserData {
            first_name: changes.first_name,
            last_name: changes.last_name,
            email,
            password_hash,
            role: changes.role,
            is_active: changes.is_active,
        })?;

        self.user_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User", id))
    }
}
