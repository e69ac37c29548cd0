//! Update Student Use Case (PUT/PATCH)
//!
//! Only the provided fields change.

use std::sync::Arc;

use crate::domain::gateways::StudentRepository;
use crate::domain::models::ids::StudentId;
use crate::domain::models::student::{Student, UpdateStudentData};
use crate::shared::errors::UseCaseError;

/// Use case for updating a student
pub struct UpdateStudentUseCase {
    student_repository: Arc<dyn StudentRepository>,
}

impl UpdateStudentUseCase {
    #[must_use]
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the student doesn't exist.
    /// Returns `UseCaseError::Domain` if an updated field is invalid.
    pub async fn execute(&self, id: &StudentId, data: UpdateStudentData) -> Result<Student, UseCaseError> {
        tracing::info!(student_id = %id, "Updating student");

        let existing = self
            .student_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Student", id))?;

        let updated = existing.with_updates(data)?;
        let saved = self
            .student_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Student", id))?;

        tracing::info!(student_id = %id, "Student updated successfully");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::student_repository::MockStudentRepository;
    use crate::domain::models::student::CreateStudentData;

    fn existing_student() -> Student {
        Student::new(CreateStudentData {
            first_name: "Yasmine".to_string(),
            last_name: "Benali".to_string(),
            birth_date: None,
            phone: Some("0550123456".to_string()),
            email: None,
            address: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_only_change_given_fields() {
        let student = existing_student();
        let id = *student.id();

        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(student.clone())));
        repo.expect_update().returning(|s| Ok(Some(s.clone())));

        let use_case = UpdateStudentUseCase::new(Arc::new(repo));
        let updated = use_case
            .execute(
                &id,
                UpdateStudentData {
                    address: Some("12 rue Didouche Mourad".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.address(), Some("12 rue Didouche Mourad"));
        assert_eq!(updated.phone(), Some("0550123456"));
        assert_eq!(updated.first_name(), "Yasmine");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_student() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let use_case = UpdateStudentUseCase::new(Arc::new(repo));
        let result = use_case.execute(&StudentId::new(), UpdateStudentData::default()).await;

        assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
    }
}
