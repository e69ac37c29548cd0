//! List Students Use Case

use std::sync::Arc;

use crate::domain::gateways::StudentRepository;
use crate::domain::models::student::Student;
use crate::shared::errors::UseCaseError;

/// Use case for listing students, with an optional name search
pub struct ListStudentsUseCase {
    student_repository: Arc<dyn StudentRepository>,
}

impl ListStudentsUseCase {
    #[must_use]
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, search: Option<String>) -> Result<Vec<Student>, UseCaseError> {
        let search = search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        tracing::debug!(search = ?search, "Listing students");

        let students = self.student_repository.find_all(search).await?;

        tracing::debug!(count = students.len(), "Retrieved students");
        Ok(students)
    }
}
