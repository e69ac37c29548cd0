//! Reject Registration Use Case

use std::sync::Arc;

use super::get_registration_by_id::load;
use crate::domain::gateways::RegistrationRepository;
use crate::domain::models::ids::RegistrationId;
use crate::domain::models::registration::Registration;
use crate::shared::errors::UseCaseError;

pub struct RejectRegistrationUseCase {
    registration_repository: Arc<dyn RegistrationRepository>,
}

impl RejectRegistrationUseCase {
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
    pub async fn execute(&self, id: &RegistrationId, notes: Option<String>) -> Result<Registration, UseCaseError> {
        tracing::info!(registration_id = %id, "Rejecting registration");

        let rejected = load(self.registration_repository.as_ref(), id).await?.reject(notes)?;
        self.registration_repository
            .update(&rejected)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Registration", id))
    }
}
