//! Get User By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::ids::UserId;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

pub struct GetUserByIdUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the user doesn't exist.
    pub async fn execute(&self, id: &UserId) -> Result<User, UseCaseError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User", id))
    }
}
