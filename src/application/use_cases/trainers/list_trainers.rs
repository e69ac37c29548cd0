//! List Trainers Use Case

use std::sync::Arc;

use crate::domain::gateways::TrainerRepository;
use crate::domain::models::trainer::Trainer;
use crate::shared::errors::UseCaseError;

pub struct ListTrainersUseCase {
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl ListTrainersUseCase {
    #[must_use]
    pub fn new(trainer_repository: Arc<dyn TrainerRepository>) -> Self {
        Self { trainer_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Trainer>, UseCaseError> {
        Ok(self.trainer_repository.find_all().await?)
    }
}
