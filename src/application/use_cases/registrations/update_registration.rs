//! Update Registration Use Case

use std::sync::Arc;

use super::create_registration::ensure_session_of_course;
use super::get_registration_by_id::load;
use crate::domain::gateways::{CourseRepository, RegistrationRepository, SessionRepository};
use crate::domain::models::ids::RegistrationId;
use crate::domain::models::registration::{Registration, UpdateRegistrationData};
use crate::shared::errors::UseCaseError;

pub struct UpdateRegistrationUseCase {
    registration_repository: Arc<dyn RegistrationRepository>,
    course_repository: Arc<dyn CourseRepository>,
    session_repository: Arc<dyn SessionRepository>,
}

impl UpdateRegistrationUseCase {
    #[must_use]
    pub fn new(
        registration_repository: Arc<dyn RegistrationRepository>,
        course_repository: Arc<dyn CourseRepository>,
        session_repository: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            registration_repository,
            course_repository,
            session_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the registration, course or session doesn't exist.
    /// Returns `UseCaseError::Domain` if the registration was already validated.
    pub async fn execute(
        &self,
        id: &RegistrationId,
        data: UpdateRegistrationData,
    ) -> Result<Registration, UseCaseError> {
        tracing::info!(registration_id = %id, "Updating registration");

        let existing = load(self.registration_repository.as_ref(), id).await?;

        if let Some(course_id) = &data.course_id {
            if self.course_repository.find_by_id(course_id).await?.is_none() {
                return Err(UseCaseError::not_found("Course", course_id));
            }
        }
        let course_id = data.course_id.unwrap_or(*existing.course_id());
        let session_id = data.session_id.as_ref().or(existing.session_id()).copied();
        ensure_session_of_course(self.session_repository.as_ref(), session_id.as_ref(), &course_id).await?;

        let updated = existing.with_updates(data)?;
        self.registration_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Registration", id))
    }
}
