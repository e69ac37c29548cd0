//! Get Current User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::ids::UserId;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

pub struct GetCurrentUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetCurrentUserUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` when the token's account is gone
    /// or disabled.
    pub async fn execute(&self, id: &UserId) -> Result<User, UseCaseError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .filter(User::is_active)
            .ok_or_else(|| UseCaseError::Unauthorized("account is no longer active".to_string()))
    }
}
