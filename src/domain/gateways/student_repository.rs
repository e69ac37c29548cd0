//! Student Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::StudentId;
use crate::domain::models::student::Student;
use crate::shared::errors::RepositoryError;

/// Repository trait for Student persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find a student by its ID
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, RepositoryError>;

    /// List students sorted by name, optionally matching `search` against
    /// first or last name (case-insensitive)
    async fn find_all(&self, search: Option<String>) -> Result<Vec<Student>, RepositoryError>;

    /// Number of stored students
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Insert a new student
    async fn create(&self, student: &Student) -> Result<Student, RepositoryError>;

    /// Update an existing student
    async fn update(&self, student: &Student) -> Result<Option<Student>, RepositoryError>;

    /// Delete a student together with its enrollments, installments and payments
    async fn delete(&self, id: &StudentId) -> Result<bool, RepositoryError>;
}
