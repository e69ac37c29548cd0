//! Trainer Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::TrainerId;
use crate::domain::models::trainer::Trainer;
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainerRepository: Send + Sync {
    async fn find_by_id(&self, id: &TrainerId) -> Result<Option<Trainer>, RepositoryError>;

    /// List trainers sorted by name
    async fn find_all(&self) -> Result<Vec<Trainer>, RepositoryError>;

    async fn count(&self) -> Result<i64, RepositoryError>;

    async fn create(&self, trainer: &Trainer) -> Result<Trainer, RepositoryError>;

    async fn update(&self, trainer: &Trainer) -> Result<Option<Trainer>, RepositoryError>;

    async fn delete(&self, id: &TrainerId) -> Result<bool, RepositoryError>;
}
