//! Validate Registration Use Case
//!
//! Turns a pending registration into a student with an active enrollment.
//! With a payment plan the enrollment gets its installment schedule at once.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::get_registration_by_id::load;
use crate::domain::finance::plan_schedule;
use crate::domain::gateways::{
    Clock, CourseRepository, PaymentPlanRepository, RegistrationRepository, RegistrationValidation,
    SessionRepository,
};
use crate::domain::models::enrollment::{CreateEnrollmentData, Enrollment};
use crate::domain::models::ids::{PaymentPlanId, RegistrationId, UserId};
use crate::domain::models::installment::Installment;
use crate::domain::models::registration::Registration;
use crate::domain::models::student::{CreateStudentData, Student};
use crate::shared::errors::UseCaseError;

/// Everything created by a validation
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub registration: Registration,
    pub student: Student,
    pub enrollment: Enrollment,
    pub installments_count: usize,
}

pub struct ValidateRegistrationUseCase {
    registration_repository: Arc<dyn RegistrationRepository>,
    course_repository: Arc<dyn CourseRepository>,
    session_repository: Arc<dyn SessionRepository>,
    payment_plan_repository: Arc<dyn PaymentPlanRepository>,
    clock: Arc<dyn Clock>,
}

impl ValidateRegistrationUseCase {
    #[must_use]
    pub fn new(
        registration_repository: Arc<dyn RegistrationRepository>,
        course_repository: Arc<dyn CourseRepository>,
        session_repository: Arc<dyn SessionRepository>,
        payment_plan_repository: Arc<dyn PaymentPlanRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registration_repository,
            course_repository,
            session_repository,
            payment_plan_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// The enrollment starts with the session, or today without one. An
    /// unpaid registration fee is folded into the first installment.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the registration, its course, its
    /// session or the payment plan doesn't exist.
    /// Returns `UseCaseError::Domain` unless the registration is pending.
    /// Returns a repository conflict if another request validated or rejected it first.
    pub async fn execute(
        &self,
        id: &RegistrationId,
        payment_plan_id: Option<PaymentPlanId>,
        validated_by: Option<UserId>,
    ) -> Result<ValidatedRegistration, UseCaseError> {
        tracing::info!(registration_id = %id, "Validating registration");

        let registration = load(self.registration_repository.as_ref(), id).await?;

        let mut student = Student::new(CreateStudentData {
            first_name: registration.first_name().to_string(),
            last_name: registration.last_name().to_string(),
            birth_date: None,
            phone: registration.phone().map(ToString::to_string),
            email: registration.email().map(ToString::to_string),
            address: None,
        })?;
        if registration.registration_fee_paid() {
            student = student.mark_registration_fee_paid();
        }
        let fee_to_schedule = if registration.registration_fee_paid() {
            Decimal::ZERO
        } else {
            registration.registration_fee()
        };
        let validated = registration.validate(*student.id(), validated_by, self.clock.now())?;

        let course = self
            .course_repository
            .find_by_id(validated.course_id())
            .await?
            .ok_or_else(|| UseCaseError::not_found("Course", validated.course_id()))?;
        let plan = match payment_plan_id {
            Some(plan_id) => Some(
                self.payment_plan_repository
                    .find_by_id(&plan_id)
                    .await?
                    .ok_or_else(|| UseCaseError::not_found("PaymentPlan", plan_id))?,
            ),
            None => None,
        };
        let (start_date, end_date) = match validated.session_id() {
            Some(session_id) => {
                let session = self
                    .session_repository
                    .find_by_id(session_id)
                    .await?
                    .ok_or_else(|| UseCaseError::not_found("Session", session_id))?;
                (session.start_date(), Some(session.end_date()))
            }
            None => (self.clock.today(), None),
        };

        let enrollment = Enrollment::new(CreateEnrollmentData {
            student_id: *student.id(),
            course_id: *course.id(),
            session_id: validated.session_id().copied(),
            payment_plan_id,
            start_date,
            end_date,
        })?;
        let schedule = match &plan {
            Some(plan) => plan_schedule(&course, plan, start_date, fee_to_schedule)?
                .into_iter()
                .map(|line| Installment::new(*enrollment.id(), line, self.clock.today()))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        let installments_count = schedule.len();

        let registration = self
            .registration_repository
            .complete_validation(RegistrationValidation {
                registration: validated,
                student: student.clone(),
                enrollment: enrollment.clone(),
                schedule,
            })
            .await?;

        tracing::info!(
            registration_id = %id,
            student_id = %student.id(),
            enrollment_id = %enrollment.id(),
            installments = installments_count,
            "Registration validated"
        );
        Ok(ValidatedRegistration {
            registration,
            student,
            enrollment,
            installments_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures;
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::gateways::payment_plan_repository::MockPaymentPlanRepository;
    use crate::domain::gateways::registration_repository::MockRegistrationRepository;
    use crate::domain::gateways::session_repository::MockSessionRepository;
    use crate::shared::errors::RepositoryError;
    use crate::domain::models::course::{Course, CourseType, PriceModel};
    use crate::domain::models::payment_plan::PaymentPlan;
    use crate::domain::models::registration::{CreateRegistrationData, RegistrationStatus};
    use rust_decimal_macros::dec;

    struct Setup {
        registrations: MockRegistrationRepository,
        courses: MockCourseRepository,
        plans: MockPaymentPlanRepository,
    }

    impl Setup {
        fn new(registration: &Registration, course: &Course, plan: Option<PaymentPlan>) -> Self {
            let registration = registration.clone();
            let course = course.clone();
            let mut registrations = MockRegistrationRepository::new();
            registrations
                .expect_find_by_id()
                .returning(move |_| Ok(Some(registration.clone())));
            let mut courses = MockCourseRepository::new();
            courses.expect_find_by_id().returning(move |_| Ok(Some(course.clone())));
            let mut plans = MockPaymentPlanRepository::new();
            plans.expect_find_by_id().returning(move |_| Ok(plan.clone()));
            Self {
                registrations,
                courses,
                plans,
            }
        }

        fn build(self) -> ValidateRegistrationUseCase {
            ValidateRegistrationUseCase::new(
                Arc::new(self.registrations),
                Arc::new(self.courses),
                Arc::new(MockSessionRepository::new()),
                Arc::new(self.plans),
                Arc::new(fixtures::clock()),
            )
        }
    }

    fn registration(course: &Course) -> Registration {
        Registration::new(CreateRegistrationData {
            first_name: "Nadia".into(),
            last_name: "Khelifi".into(),
            email: Some("nadia@example.com".into()),
            phone: None,
            course_id: *course.id(),
            session_id: None,
            notes: None,
            registration_fee: dec!(1500),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_create_student_enrollment_and_plan_schedule() {
        let course = fixtures::course(CourseType::Qualifying, PriceModel::Global, dec!(30000), 6);
        let plan = fixtures::plan(3, 30);
        let plan_id = *plan.id();
        let pending = registration(&course).pay_fee(chrono::Utc::now()).unwrap();
        let id = *pending.id();

        let mut setup = Setup::new(&pending, &course, Some(plan));
        setup
            .registrations
            .expect_complete_validation()
            .times(1)
            .withf(|v| {
                v.enrollment.start_date() == fixtures::date(2025, 11, 10)
                    && v.enrollment.student_id() == v.student.id()
                    && v.schedule.len() == 3
                    && v.schedule.iter().map(Installment::amount).sum::<Decimal>() == dec!(30000)
            })
            .returning(|v| Ok(v.registration));

        let result = setup.build().execute(&id, Some(plan_id), None).await.unwrap();

        assert_eq!(result.registration.status(), RegistrationStatus::Validated);
        assert_eq!(result.registration.student_id(), Some(result.student.id()));
        assert!(result.student.is_registration_fee_paid());
        assert_eq!(result.enrollment.student_id(), result.student.id());
        assert_eq!(result.installments_count, 3);
    }

    #[tokio::test]
    async fn should_fold_unpaid_fee_into_first_installment() {
        let course = fixtures::course(CourseType::Qualifying, PriceModel::Global, dec!(30000), 6);
        let plan = fixtures::plan(3, 30);
        let plan_id = *plan.id();
        let pending = registration(&course);
        let id = *pending.id();

        let mut setup = Setup::new(&pending, &course, Some(plan));
        setup
            .registrations
            .expect_complete_validation()
            .withf(|v| v.schedule[0].amount() == dec!(11500))
            .returning(|v| Ok(v.registration));

        let result = setup.build().execute(&id, Some(plan_id), None).await.unwrap();

        assert!(!result.student.is_registration_fee_paid());
    }

    #[tokio::test]
    async fn should_refuse_rejected_registration() {
        let course = fixtures::course(CourseType::Qualifying, PriceModel::Global, dec!(30000), 6);
        let rejected = registration(&course).reject(None).unwrap();
        let id = *rejected.id();

        let mut setup = Setup::new(&rejected, &course, None);
        setup.registrations.expect_complete_validation().never();

        let result = setup.build().execute(&id, None, None).await;

        assert!(matches!(result, Err(UseCaseError::Domain(_))));
    }

    #[tokio::test]
    async fn should_report_registration_validated_concurrently() {
        let course = fixtures::course(CourseType::Qualifying, PriceModel::Global, dec!(30000), 6);
        let pending = registration(&course);
        let id = *pending.id();

        let mut setup = Setup::new(&pending, &course, None);
        setup
            .registrations
            .expect_complete_validation()
            .returning(|_| Err(RepositoryError::Conflict("is no longer pending".into())));

        let result = setup.build().execute(&id, None, None).await;

        assert!(matches!(result, Err(UseCaseError::Repository(RepositoryError::Conflict(_)))));
    }
}
