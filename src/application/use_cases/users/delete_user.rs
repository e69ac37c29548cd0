//! Delete User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::ids::UserId;
use crate::shared::errors::UseCaseError;

pub struct DeleteUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// `current_user` is the account performing the deletion.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` when a user tries to delete itself.
    /// Returns `UseCaseError::NotFound` if the user doesn't exist.
    pub async fn execute(&self, id: &UserId, current_user: &UserId) -> Result<(), UseCaseError> {
        tracing::info!(user_id = %id, "Deleting user");

        if id == current_user {
            return Err(UseCaseError::Conflict("you cannot delete your own account".to_string()));
        }
        if !self.user_repository.delete(id).await? {
            return Err(UseCaseError::not_found("User", id));
        }
        Ok(())
    }
}
