//! Get Course By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::course::Course;
use crate::domain::models::ids::CourseId;
use crate::shared::errors::UseCaseError;

pub struct GetCourseByIdUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl GetCourseByIdUseCase {
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist.
    pub async fn execute(&self, id: &CourseId) -> Result<Course, UseCaseError> {
        tracing::debug!(course_id = %id, "Getting course by ID");

        self.course_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Course", id))
    }
}
