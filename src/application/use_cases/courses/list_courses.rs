//! List Courses Use Case

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::course::Course;
use crate::shared::errors::UseCaseError;

pub struct ListCoursesUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl ListCoursesUseCase {
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, active_only: bool) -> Result<Vec<Course>, UseCaseError> {
        tracing::debug!(active_only, "Listing courses");
        Ok(self.course_repository.find_all(active_only).await?)
    }
}
