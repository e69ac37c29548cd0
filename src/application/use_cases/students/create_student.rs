//! Create Student Use Case

use std::sync::Arc;

use crate::domain::gateways::StudentRepository;
use crate::domain::models::student::{CreateStudentData, Student};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new student
pub struct CreateStudentUseCase {
    student_repository: Arc<dyn StudentRepository>,
}

impl CreateStudentUseCase {
    /// Create a new CreateStudentUseCase
    #[must_use]
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the data breaks a student invariant.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateStudentData) -> Result<Student, UseCaseError> {
        tracing::info!(last_name = %data.last_name, "Creating new student");

        let student = Student::new(data)?;
        let created = self.student_repository.create(&student).await?;

        tracing::info!(student_id = %created.id(), "Student created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::student_repository::MockStudentRepository;

    fn create_test_data() -> CreateStudentData {
        CreateStudentData {
            first_name: "Yasmine".to_string(),
            last_name: "Benali".to_string(),
            birth_date: None,
            phone: None,
            email: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn should_create_student() {
        let mut repo = MockStudentRepository::new();
        repo.expect_create().times(1).returning(|s| Ok(s.clone()));

        let use_case = CreateStudentUseCase::new(Arc::new(repo));
        let student = use_case.execute(create_test_data()).await.unwrap();

        assert_eq!(student.full_name(), "Yasmine Benali");
    }

    #[tokio::test]
    async fn should_not_touch_repository_when_invalid() {
        let mut repo = MockStudentRepository::new();
        repo.expect_create().never();

        let mut data = create_test_data();
        data.first_name = " ".to_string();

        let use_case = CreateStudentUseCase::new(Arc::new(repo));
        let result = use_case.execute(data).await;

        assert!(matches!(result, Err(UseCaseError::Domain(_))));
    }
}
