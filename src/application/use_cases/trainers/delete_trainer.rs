//! Delete Trainer Use Case

use std::sync::Arc;

use crate::domain::gateways::TrainerRepository;
use crate::domain::models::ids::TrainerId;
use crate::shared::errors::UseCaseError;

pub struct DeleteTrainerUseCase {
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl DeleteTrainerUseCase {
    #[must_use]
    pub fn new(trainer_repository: Arc<dyn TrainerRepository>) -> Self {
        Self { trainer_repository }
    }

    /// Execute the use case
    ///
    /// Courses and sessions taught by the trainer keep existing without one.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the trainer doesn't exist.
    pub async fn execute(&self, id: &TrainerId) -> Result<(), UseCaseError> {
        tracing::info!(trainer_id = %id, "Deleting trainer");

        if !self.trainer_repository.delete(id).await? {
            return Err(UseCaseError::not_found("Trainer", id));
        }
        Ok(())
    }
}
