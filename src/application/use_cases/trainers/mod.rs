//! Trainer Use Cases

mod create_trainer;
mod delete_trainer;
mod get_trainer_by_id;
mod list_trainers;
mod update_trainer;

use std::sync::Arc;

pub use create_trainer::CreateTrainerUseCase;
pub use delete_trainer::DeleteTrainerUseCase;
pub use get_trainer_by_id::GetTrainerByIdUseCase;
pub use list_trainers::ListTrainersUseCase;
pub use update_trainer::UpdateTrainerUseCase;

use crate::domain::gateways::TrainerRepository;

pub struct TrainerUseCases {
    pub create: CreateTrainerUseCase,
    pub list: ListTrainersUseCase,
    pub get: GetTrainerByIdUseCase,
    pub update: UpdateTrainerUseCase,
    pub delete: DeleteTrainerUseCase,
}

impl TrainerUseCases {
    #[must_use]
    pub fn new(trainers: &Arc<dyn TrainerRepository>) -> Self {
        Self {
            create: CreateTrainerUseCase::new(trainers.clone()),
            list: ListTrainersUseCase::new(trainers.clone()),
            get: GetTrainerByIdUseCase::new(trainers.clone()),
            update: UpdateTrainerUseCase::new(trainers.clone()),
            delete: DeleteTrainerUseCase::new(trainers.clone()),
        }
    }
}
