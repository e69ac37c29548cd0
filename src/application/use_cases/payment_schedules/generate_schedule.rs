//! Generate Schedule Use Case

use std::sync::Arc;

use crate::domain::finance::course_schedule;
use crate::domain::gateways::{Clock, CourseRepository, EnrollmentRepository, InstallmentRepository};
use crate::domain::models::ids::EnrollmentId;
use crate::domain::models::installment::Installment;
use crate::shared::errors::UseCaseError;

/// Builds the course-type schedule of an enrollment that has none yet
pub struct GenerateScheduleUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    course_repository: Arc<dyn CourseRepository>,
    clock: Arc<dyn Clock>,
}

impl GenerateScheduleUseCase {
    #[must_use]
    pub fn new(
        installment_repository: Arc<dyn InstallmentRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        course_repository: Arc<dyn CourseRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            installment_repository,
            enrollment_repository,
            course_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the enrollment or its course doesn't exist.
    /// Returns `UseCaseError::Conflict` if the enrollment already has a schedule.
    /// Returns `UseCaseError::Domain` if the course has no price.
    pub async fn execute(&self, enrollment_id: &EnrollmentId) -> Result<Vec<Installment>, UseCaseError> {
        tracing::info!(enrollment_id = %enrollment_id, "Generating payment schedule");

        let enrollment = self
            .enrollment_repository
            .find_by_id(enrollment_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Enrollment", enrollment_id))?;
        if !self
            .installment_repository
            .find_by_enrollment(enrollment_id)
            .await?
            .is_empty()
        {
            return Err(UseCaseError::Conflict(
                "a payment schedule already exists for this enrollment".to_string(),
            ));
        }
        let course = self
            .course_repository
            .find_by_id(enrollment.course_id())
            .await?
            .ok_or_else(|| UseCaseError::not_found("Course", enrollment.course_id()))?;

        let today = self.clock.today();
        let installments = course_schedule(&course, enrollment.start_date(), enrollment.end_date())?
            .into_iter()
            .map(|line| Installment::new(*enrollment_id, line, today))
            .collect::<Result<Vec<_>, _>>()?;
        let created = self.installment_repository.create_many(installments).await?;

        tracing::info!(
            enrollment_id = %enrollment_id,
            course_type = %course.course_type(),
            installments = created.len(),
            "Payment schedule generated"
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures;
    use crate::domain::finance::ScheduledInstallment;
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::gateways::enrollment_repository::MockEnrollmentRepository;
    use crate::domain::gateways::installment_repository::MockInstallmentRepository;
    use crate::domain::models::course::{CourseType, PriceModel};
    use crate::domain::models::ids::StudentId;
    use rust_decimal_macros::dec;

    fn use_case(existing: Vec<Installment>, installments: MockInstallmentRepository) -> (GenerateScheduleUseCase, EnrollmentId) {
        let course = fixtures::course(CourseType::TutoringGroup, PriceModel::Monthly, dec!(25000), 10);
        let enrollment = fixtures::enrollment(StudentId::new(), *course.id(), fixtures::date(2025, 10, 15));
        let enrollment_id = *enrollment.id();

        let mut installments = installments;
        installments
            .expect_find_by_enrollment()
            .returning(move |_| Ok(existing.clone()));
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_by_id()
            .returning(move |_| Ok(Some(enrollment.clone())));
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(move |_| Ok(Some(course.clone())));

        let use_case = GenerateScheduleUseCase::new(
            Arc::new(installments),
            Arc::new(enrollments),
            Arc::new(courses),
            Arc::new(fixtures::clock()),
        );
        (use_case, enrollment_id)
    }

    #[tokio::test]
    async fn should_generate_school_year_for_tutoring() {
        let mut installments = MockInstallmentRepository::new();
        installments.expect_create_many().returning(Ok);

        let (use_case, enrollment_id) = use_case(Vec::new(), installments);
        let schedule = use_case.execute(&enrollment_id).await.unwrap();

        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule[0].due_date(), fixtures::date(2025, 9, 5));
        assert_eq!(schedule[9].due_date(), fixtures::date(2026, 6, 5));
        assert!(schedule.iter().all(|i| i.amount() == dec!(2500)));
        assert_eq!(schedule[2].notes(), Some("Paiement 3/10 - Novembre 2025"));
    }

    #[tokio::test]
    async fn should_refuse_second_schedule() {
        let existing = Installment::new(
            EnrollmentId::new(),
            ScheduledInstallment {
                number: 1,
                amount: dec!(100),
                due_date: fixtures::date(2025, 9, 5),
                notes: None,
            },
            fixtures::date(2025, 11, 10),
        )
        .unwrap();
        let mut installments = MockInstallmentRepository::new();
        installments.expect_create_many().never();

        let (use_case, enrollment_id) = use_case(vec![existing], installments);
        let result = use_case.execute(&enrollment_id).await;

        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
    }
}
