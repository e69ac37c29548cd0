//! Delete Course Use Case

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::ids::CourseId;
use crate::shared::errors::UseCaseError;

pub struct DeleteCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl DeleteCourseUseCase {
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist.
    /// Returns a conflict if enrollments, sessions or registrations still
    /// reference the course.
    pub async fn execute(&self, id: &CourseId) -> Result<(), UseCaseError> {
        tracing::info!(course_id = %id, "Deleting course");

        if !self.course_repository.delete(id).await? {
            tracing::warn!(course_id = %id, "Course not found for deletion");
            return Err(UseCaseError::not_found("Course", id));
        }
        Ok(())
    }
}
