//! Update Course Use Case

use std::sync::Arc;

use crate::domain::gateways::{CourseRepository, TrainerRepository};
use crate::domain::models::course::{Course, UpdateCourseData};
use crate::domain::models::ids::CourseId;
use crate::shared::errors::UseCaseError;

pub struct UpdateCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl UpdateCourseUseCase {
    #[must_use]
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        trainer_repository: Arc<dyn TrainerRepository>,
    ) -> Self {
        Self {
            course_repository,
            trainer_repository,
        }
    }

    /// Execute the use case
    ///
    /// Existing schedules keep their amounts; pricing changes only apply to
    /// schedules generated afterwards.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course or the new trainer doesn't exist.
    pub async fn execute(&self, id: &CourseId, data: UpdateCourseData) -> Result<Course, UseCaseError> {
        tracing::info!(course_id = %id, "Updating course");

        let existing = self
            .course_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Course", id))?;

        if let Some(trainer_id) = &data.trainer_id {
            if self.trainer_repository.find_by_id(trainer_id).await?.is_none() {
                return Err(UseCaseError::not_found("Trainer", trainer_id));
            }
        }

        let updated = existing.with_updates(data)?;
        let saved = self
            .course_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Course", id))?;

        tracing::info!(course_id = %id, "Course updated successfully");
        Ok(saved)
    }
}
