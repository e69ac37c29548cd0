//! Course Repository Gateway

use async_trait::async_trait;

use crate::domain::models::course::Course;
use crate::domain::models::ids::CourseId;
use crate::shared::errors::RepositoryError;

/// Repository trait for the course catalogue
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by its ID
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, RepositoryError>;

    /// List courses sorted by title, only active ones when `active_only`
    async fn find_all(&self, active_only: bool) -> Result<Vec<Course>, RepositoryError>;

    /// Number of active courses
    async fn count_active(&self) -> Result<i64, RepositoryError>;

    /// Insert a new course
    async fn create(&self, course: &Course) -> Result<Course, RepositoryError>;

    /// Update an existing course
    async fn update(&self, course: &Course) -> Result<Option<Course>, RepositoryError>;

    /// Delete a course; fails with a foreign key violation while enrolled
    async fn delete(&self, id: &CourseId) -> Result<bool, RepositoryError>;
}
