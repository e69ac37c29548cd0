//! Update Enrollment Status Use Case

use std::sync::Arc;

use crate::domain::gateways::EnrollmentRepository;
use crate::domain::models::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::models::ids::EnrollmentId;
use crate::shared::errors::UseCaseError;

pub struct UpdateEnrollmentStatusUseCase {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl UpdateEnrollmentStatusUseCase {
    #[must_use]
    pub fn new(enrollment_repository: Arc<dyn EnrollmentRepository>) -> Self {
        Self { enrollment_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the enrollment doesn't exist.
    pub async fn execute(&self, id: &EnrollmentId, status: EnrollmentStatus) -> Result<Enrollment, UseCaseError> {
        tracing::info!(enrollment_id = %id, status = %status, "Changing enrollment status");

        let enrollment = self
            .enrollment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Enrollment", id))?
            .with_status(status);
        self.enrollment_repository
            .update(&enrollment)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Enrollment", id))
    }
}
