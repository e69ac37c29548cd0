//! Get Registration By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::RegistrationRepository;
use crate::domain::models::ids::RegistrationId;
use crate::domain::models::registration::Registration;
use crate::shared::errors::UseCaseError;

pub struct GetRegistrationByIdUseCase {
    registration_repository: Arc<dyn RegistrationRepository>,
}

impl GetRegistrationByIdUseCase {
    #[must_use]
    pub fn new(registration_repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { registration_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the registration doesn't exist.
    pub async fn execute(&self, id: &RegistrationId) -> Result<Registration, UseCaseError> {
        load(self.registration_repository.as_ref(), id).await
    }
}

/// Fetch a registration or fail with `NotFound`
pub(super) async fn load(
    registrations: &dyn RegistrationRepository,
    id: &RegistrationId,
) -> Result<Registration, UseCaseError> {
    registrations
        .find_by_id(id)
        .await?
        .ok_or_else(|| UseCaseError::not_found("Registration", id))
}
