//! Delete Enrollment Use Case

use std::sync::Arc;

use crate::domain::gateways::EnrollmentRepository;
use crate::domain::models::ids::EnrollmentId;
use crate::shared::errors::UseCaseError;

pub struct DeleteEnrollmentUseCase {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl DeleteEnrollmentUseCase {
    #[must_use]
    pub fn new(enrollment_repository: Arc<dyn EnrollmentRepository>) -> Self {
        Self { enrollment_repository }
    }

    /// Execute the use case
    ///
    /// The schedule and its payments go with the enrollment. Ledger entries
    /// stay and lose their payment link.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the enrollment doesn't exist.
    pub async fn execute(&self, id: &EnrollmentId) -> Result<(), UseCaseError> {
        tracing::info!(enrollment_id = %id, "Deleting enrollment");

        if !self.enrollment_repository.delete(id).await? {
            return Err(UseCaseError::not_found("Enrollment", id));
        }
        Ok(())
    }
}
