//! Delete Registration Use Case

use std::sync::Arc;

use super::get_registration_by_id::load;
use crate::domain::gateways::RegistrationRepository;
use crate::domain::models::ids::RegistrationId;
use crate::shared::errors::UseCaseError;

pub struct DeleteRegistrationUseCase {
    registration_repository: Arc<dyn RegistrationRepository>,
}

impl DeleteRegistrationUseCase {
    #[must_use]
    pub fn new(registration_repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { registration_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the registration doesn't exist.
    /// Returns `UseCaseError::Domain` if it was already validated.
    pub async fn execute(&self, id: &RegistrationId) -> Result<(), UseCaseError> {
        tracing::info!(registration_id = %id, "Deleting registration");

        load(self.registration_repository.as_ref(), id)
            .await?
            .ensure_deletable()?;
        if !self.registration_repository.delete(id).await? {
            return Err(UseCaseError::not_found("Registration", id));
        }
        Ok(())
    }
}
