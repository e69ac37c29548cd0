//! Get Student Enrollments Use Case

use std::sync::Arc;

use crate::domain::gateways::{EnrollmentRepository, StudentRepository};
use crate::domain::models::enrollment::Enrollment;
use crate::domain::models::ids::StudentId;
use crate::shared::errors::UseCaseError;

/// Use case for listing the enrollments of one student
pub struct GetStudentEnrollmentsUseCase {
    student_repository: Arc<dyn StudentRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl GetStudentEnrollmentsUseCase {
    #[must_use]
    pub fn new(
        student_repository: Arc<dyn StudentRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            student_repository,
            enrollment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the student doesn't exist.
    pub async fn execute(&self, id: &StudentId) -> Result<Vec<Enrollment>, UseCaseError> {
        if self.student_repository.find_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found("Student", id));
        }
        Ok(self.enrollment_repository.find_all(Some(*id)).await?)
    }
}
