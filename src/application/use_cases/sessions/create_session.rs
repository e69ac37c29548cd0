//! Create Session Use Case

use std::sync::Arc;

use crate::domain::gateways::{CourseRepository, SessionRepository, TrainerRepository};
use crate::domain::models::session::{CreateSessionData, Session};
use crate::shared::errors::UseCaseError;

/// Use case for scheduling a new session of a course
pub struct CreateSessionUseCase {
    session_repository: Arc<dyn SessionRepository>,
    course_repository: Arc<dyn CourseRepository>,
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl CreateSessionUseCase {
    #[must_use]
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        course_repository: Arc<dyn CourseRepository>,
        trainer_repository: Arc<dyn TrainerRepository>,
    ) -> Self {
        Self {
            session_repository,
            course_repository,
            trainer_repository,
        }
    }

    /// Execute the use case
    ///
    /// Without an explicit trainer the course's trainer is used.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course or trainer doesn't exist.
    /// Returns `UseCaseError::Domain` if dates or capacity are invalid.
    pub async fn execute(&self, mut data: CreateSessionData) -> Result<Session, UseCaseError> {
        tracing::info!(course_id = %data.course_id, start_date = %data.start_date, "Creating new session");

        let course = self
            .course_repository
            .find_by_id(&data.course_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Course", data.course_id))?;

        match &data.trainer_id {
            Some(trainer_id) => {
                if self.trainer_repository.find_by_id(trainer_id).await?.is_none() {
                    return Err(UseCaseError::not_found("Trainer", trainer_id));
                }
            }
            None => data.trainer_id = course.trainer_id().copied(),
        }

        let session = Session::new(data)?;
        let created = self.session_repository.create(&session).await?;

        tracing::info!(session_id = %created.id(), "Session created successfully");
        Ok(created)
    }
}
