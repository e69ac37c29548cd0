//! Get Student By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::StudentRepository;
use crate::domain::models::ids::StudentId;
use crate::domain::models::student::Student;
use crate::shared::errors::UseCaseError;

/// Use case for retrieving a student by ID
pub struct GetStudentByIdUseCase {
    student_repository: Arc<dyn StudentRepository>,
}

impl GetStudentByIdUseCase {
    #[must_use]
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the student doesn't exist.
    pub async fn execute(&self, id: &StudentId) -> Result<Student, UseCaseError> {
        tracing::debug!(student_id = %id, "Getting student by ID");

        self.student_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(student_id = %id, "Student not found");
            UseCaseError::not_found("Student", id)
        })
    }
}
