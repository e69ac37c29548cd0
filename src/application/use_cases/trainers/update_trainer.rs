//! Update Trainer Use Case

use std::sync::Arc;

use crate::domain::gateways::TrainerRepository;
use crate::domain::models::ids::TrainerId;
use crate::domain::models::trainer::{Trainer, UpdateTrainerData};
use crate::shared::errors::UseCaseError;

pub struct UpdateTrainerUseCase {
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl UpdateTrainerUseCase {
    #[must_use]
    pub fn new(trainer_repository: Arc<dyn TrainerRepository>) -> Self {
        Self { trainer_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the trainer doesn't exist.
    pub async fn execute(&self, id: &TrainerId, data: UpdateTrainerData) -> Result<Trainer, UseCaseError> {
        tracing::info!(trainer_id = %id, "Updating trainer");

        let existing = self
            .trainer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Trainer", id))?;

        let updated = existing.with_updates(data)?;
        self.trainer_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Trainer", id))
    }
}
