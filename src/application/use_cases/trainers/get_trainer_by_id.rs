//! Get Trainer By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::TrainerRepository;
use crate::domain::models::ids::TrainerId;
use crate::domain::models::trainer::Trainer;
use crate::shared::errors::UseCaseError;

pub struct GetTrainerByIdUseCase {
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl GetTrainerByIdUseCase {
    #[must_use]
    pub fn new(trainer_repository: Arc<dyn TrainerRepository>) -> Self {
        Self { trainer_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the trainer doesn't exist.
    pub async fn execute(&self, id: &TrainerId) -> Result<Trainer, UseCaseError> {
        self.trainer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Trainer", id))
    }
}
