//! Delete Session Use Case

use std::sync::Arc;

use crate::domain::gateways::SessionRepository;
use crate::domain::models::ids::SessionId;
use crate::shared::errors::UseCaseError;

pub struct DeleteSessionUseCase {
    session_repository: Arc<dyn SessionRepository>,
}

impl DeleteSessionUseCase {
    #[must_use]
    pub fn new(session_repository: Arc<dyn SessionRepository>) -> Self {
        Self { session_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the session doesn't exist.
    pub async fn execute(&self, id: &SessionId) -> Result<(), UseCaseError> {
        tracing::info!(session_id = %id, "Deleting session");

        if !self.session_repository.delete(id).await? {
            return Err(UseCaseError::not_found("Session", id));
        }
        Ok(())
    }
}
