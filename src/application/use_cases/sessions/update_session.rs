//! Update Session Use Case

use std::sync::Arc;

use crate::domain::gateways::{SessionRepository, TrainerRepository};
use crate::domain::models::ids::SessionId;
use crate::domain::models::session::{Session, UpdateSessionData};
use crate::shared::errors::UseCaseError;

pub struct UpdateSessionUseCase {
    session_repository: Arc<dyn SessionRepository>,
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl UpdateSessionUseCase {
    #[must_use]
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        trainer_repository: Arc<dyn TrainerRepository>,
    ) -> Self {
        Self {
            session_repository,
            trainer_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the session or new trainer doesn't exist.
    /// Returns `UseCaseError::Domain` if the result has invalid dates or capacity.
    pub async fn execute(&self, id: &SessionId, data: UpdateSessionData) -> Result<Session, UseCaseError> {
        tracing::info!(session_id = %id, "Updating session");

        let existing = self
            .session_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Session", id))?;

        if let Some(trainer_id) = &data.trainer_id {
            if self.trainer_repository.find_by_id(trainer_id).await?.is_none() {
                return Err(UseCaseError::not_found("Trainer", trainer_id));
            }
        }

        let updated = existing.with_updates(data)?;
        self.session_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Session", id))
    }
}
