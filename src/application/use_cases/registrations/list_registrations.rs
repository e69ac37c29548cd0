//! List Registrations Use Case

use std::sync::Arc;

use crate::domain::gateways::RegistrationRepository;
use crate::domain::models::registration::{Registration, RegistrationStatus};
use crate::shared::errors::UseCaseError;

pub struct ListRegistrationsUseCase {
    registration_repository: Arc<dyn RegistrationRepository>,
}

impl ListRegistrationsUseCase {
    #[must_use]
    pub fn new(registration_repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { registration_repository }
    }

    /// Execute the use case, newest first
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, status: Option<RegistrationStatus>) -> Result<Vec<Registration>, UseCaseError> {
        Ok(self.registration_repository.find_all(status).await?)
    }
}
