//! Create Trainer Use Case

use std::sync::Arc;

use crate::domain::gateways::TrainerRepository;
use crate::domain::models::trainer::{CreateTrainerData, Trainer};
use crate::shared::errors::UseCaseError;

pub struct CreateTrainerUseCase {
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl CreateTrainerUseCase {
    #[must_use]
    pub fn new(trainer_repository: Arc<dyn TrainerRepository>) -> Self {
        Self { trainer_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if a name is blank.
    pub async fn execute(&self, data: CreateTrainerData) -> Result<Trainer, UseCaseError> {
        tracing::info!(last_name = %data.last_name, "Creating new trainer");

        let trainer = Trainer::new(data)?;
        let created = self.trainer_repository.create(&trainer).await?;

        tracing::info!(trainer_id = %created.id(), "Trainer created successfully");
        Ok(created)
    }
}
