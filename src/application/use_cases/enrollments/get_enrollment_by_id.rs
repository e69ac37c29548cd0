//! Get Enrollment By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::EnrollmentRepository;
use crate::domain::models::enrollment::Enrollment;
use crate::domain::models::ids::EnrollmentId;
use crate::shared::errors::UseCaseError;

pub struct GetEnrollmentByIdUseCase {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl GetEnrollmentByIdUseCase {
    #[must_use]
    pub fn new(enrollment_repository: Arc<dyn EnrollmentRepository>) -> Self {
        Self { enrollment_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the enrollment doesn't exist.
    pub async fn execute(&self, id: &EnrollmentId) -> Result<Enrollment, UseCaseError> {
        self.enrollment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Enrollment", id))
    }
}
