//! Create Registration Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::gateways::{CourseRepository, RegistrationRepository, SessionRepository};
use crate::domain::models::ids::{CourseId, SessionId};
use crate::domain::models::registration::{CreateRegistrationData, Registration};
use crate::shared::errors::UseCaseError;

/// A registration request; the fee defaults to the course's
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course_id: CourseId,
    pub session_id: Option<SessionId>,
    pub notes: Option<String>,
    pub registration_fee: Option<Decimal>,
}

pub struct CreateRegistrationUseCase {
    registration_repository: Arc<dyn RegistrationRepository>,
    course_repository: Arc<dyn CourseRepository>,
    session_repository: Arc<dyn SessionRepository>,
}

/// Check that `session_id`, when given, is a session of `course_id`
pub(super) async fn ensure_session_of_course(
    sessions: &dyn SessionRepository,
    session_id: Option<&SessionId>,
    course_id: &CourseId,
) -> Result<(), UseCaseError> {
    let Some(session_id) = session_id else {
        return Ok(());
    };
    let session = sessions
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| UseCaseError::not_found("Session", session_id))?;
    if session.course_id() != course_id {
        return Err(UseCaseError::Validation(vec![
            "session_id: session does not belong to the selected course".to_string(),
        ]));
    }
    Ok(())
}

impl CreateRegistrationUseCase {
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
    /// Returns `UseCaseError::NotFound` if the course or session doesn't exist.
    /// Returns `UseCaseError::Validation` if the session belongs to another course.
    pub async fn execute(&self, request: NewRegistration) -> Result<Registration, UseCaseError> {
        tracing::info!(course_id = %request.course_id, last_name = %request.last_name, "Creating registration");

        let course = self
            .course_repository
            .find_by_id(&request.course_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Course", request.course_id))?;
        ensure_session_of_course(
            self.session_repository.as_ref(),
            request.session_id.as_ref(),
            &request.course_id,
        )
        .await?;

        let registration = Registration::new(CreateRegistrationData {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            course_id: request.course_id,
            session_id: request.session_id,
            notes: request.notes,
            registration_fee: request.registration_fee.unwrap_or_else(|| course.registration_fee()),
        })?;
        let created = self.registration_repository.create(&registration).await?;

        tracing::info!(registration_id = %created.id(), "Registration created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures;
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::gateways::registration_repository::MockRegistrationRepository;
    use crate::domain::gateways::session_repository::MockSessionRepository;
    use crate::domain::models::course::{CourseType, PriceModel};
    use crate::domain::models::registration::RegistrationStatus;
    use crate::domain::models::session::{CreateSessionData, Session};
    use rust_decimal_macros::dec;

    fn request(course_id: CourseId, session_id: Option<SessionId>) -> NewRegistration {
        NewRegistration {
            first_name: "Nadia".into(),
            last_name: "Khelifi".into(),
            email: None,
            phone: Some("0550123456".into()),
            course_id,
            session_id,
            notes: None,
            registration_fee: None,
        }
    }

    #[tokio::test]
    async fn should_default_fee_to_course_fee() {
        let course = fixtures::course(CourseType::Qualifying, PriceModel::Global, dec!(30000), 6);
        let course_id = *course.id();
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(move |_| Ok(Some(course.clone())));
        let mut registrations = MockRegistrationRepository::new();
        registrations.expect_create().returning(|r| Ok(r.clone()));

        let use_case = CreateRegistrationUseCase::new(
            Arc::new(registrations),
            Arc::new(courses),
            Arc::new(MockSessionRepository::new()),
        );
        let registration = use_case.execute(request(course_id, None)).await.unwrap();

        assert_eq!(registration.registration_fee(), dec!(1500));
        assert_eq!(registration.status(), RegistrationStatus::PendingPayment);
    }

    #[tokio::test]
    async fn should_reject_session_of_another_course() {
        let course = fixtures::course(CourseType::Qualifying, PriceModel::Global, dec!(30000), 6);
        let course_id = *course.id();
        let foreign_session = Session::new(CreateSessionData {
            course_id: CourseId::new(),
            trainer_id: None,
            start_date: fixtures::date(2025, 10, 1),
            end_date: fixtures::date(2025, 12, 31),
            year: None,
            month: None,
            capacity: 10,
            location: "Salle B".into(),
            price: None,
            notes: None,
        })
        .unwrap();
        let session_id = *foreign_session.id();

        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(move |_| Ok(Some(course.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_id()
            .returning(move |_| Ok(Some(foreign_session.clone())));
        let mut registrations = MockRegistrationRepository::new();
        registrations.expect_create().never();

        let use_case = CreateRegistrationUseCase::new(Arc::new(registrations), Arc::new(courses), Arc::new(sessions));
        let result = use_case.execute(request(course_id, Some(session_id))).await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }
}
