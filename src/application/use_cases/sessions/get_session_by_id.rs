//! Get Session By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::SessionRepository;
use crate::domain::models::ids::SessionId;
use crate::domain::models::session::Session;
use crate::shared::errors::UseCaseError;

pub struct GetSessionByIdUseCase {
    session_repository: Arc<dyn SessionRepository>,
}

impl GetSessionByIdUseCase {
    #[must_use]
    pub fn new(session_repository: Arc<dyn SessionRepository>) -> Self {
        Self { session_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the session doesn't exist.
    pub async fn execute(&self, id: &SessionId) -> Result<Session, UseCaseError> {
        self.session_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Session", id))
    }
}
