//! Delete Student Use Case
//!
//! Removes the student with its enrollments, installments and payments.

use std::sync::Arc;

use crate::domain::gateways::StudentRepository;
use crate::domain::models::ids::StudentId;
use crate::shared::errors::UseCaseError;

pub struct DeleteStudentUseCase {
    student_repository: Arc<dyn StudentRepository>,
}

impl DeleteStudentUseCase {
    #[must_use]
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the student doesn't exist.
    pub async fn execute(&self, id: &StudentId) -> Result<(), UseCaseError> {
        tracing::info!(student_id = %id, "Deleting student");

        if !self.student_repository.delete(id).await? {
            tracing::warn!(student_id = %id, "Student not found for deletion");
            return Err(UseCaseError::not_found("Student", id));
        }

        tracing::info!(student_id = %id, "Student deleted successfully");
        Ok(())
    }
}
