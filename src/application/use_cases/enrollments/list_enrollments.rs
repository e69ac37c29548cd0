//! List Enrollments Use Case

use std::sync::Arc;

use crate::domain::gateways::EnrollmentRepository;
use crate::domain::models::enrollment::Enrollment;
use crate::domain::models::ids::StudentId;
use crate::shared::errors::UseCaseError;

pub struct ListEnrollmentsUseCase {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl ListEnrollmentsUseCase {
    #[must_use]
    pub fn new(enrollment_repository: Arc<dyn EnrollmentRepository>) -> Self {
        Self { enrollment_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, student_id: Option<StudentId>) -> Result<Vec<Enrollment>, UseCaseError> {
        Ok(self.enrollment_repository.find_all(student_id).await?)
    }
}
