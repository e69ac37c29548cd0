//! Create Enrollment Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::finance::plan_schedule;
use crate::domain::gateways::{
    Clock, CourseRepository, EnrollmentRepository, FeeSettlement, PaymentPlanRepository, SessionRepository,
    StudentRepository,
};
use crate::domain::models::enrollment::{CreateEnrollmentData, Enrollment};
use crate::domain::models::ids::{CourseId, PaymentPlanId, SessionId, StudentId, UserId};
use crate::domain::models::installment::Installment;
use crate::domain::models::transaction::Transaction;
use crate::shared::errors::UseCaseError;

/// Enrollment request as entered at the desk
#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub session_id: Option<SessionId>,
    pub payment_plan_id: Option<PaymentPlanId>,
    /// Defaults to today
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Registration fee handed over with this first enrollment
    pub registration_fee_collected: Option<Decimal>,
}

/// The stored enrollment and the schedule generated with it
#[derive(Debug, Clone)]
pub struct CreatedEnrollment {
    pub enrollment: Enrollment,
    pub schedule: Vec<Installment>,
}

pub struct CreateEnrollmentUseCase {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    student_repository: Arc<dyn StudentRepository>,
    course_repository: Arc<dyn CourseRepository>,
    session_repository: Arc<dyn SessionRepository>,
    payment_plan_repository: Arc<dyn PaymentPlanRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateEnrollmentUseCase {
    #[must_use]
    pub fn new(
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        student_repository: Arc<dyn StudentRepository>,
        course_repository: Arc<dyn CourseRepository>,
        session_repository: Arc<dyn SessionRepository>,
        payment_plan_repository: Arc<dyn PaymentPlanRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            enrollment_repository,
            student_repository,
            course_repository,
            session_repository,
            payment_plan_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// The first enrollment of a student settles the registration fee: a
    /// collected amount is booked in the ledger, otherwise the course fee is
    /// added to the first installment of the plan schedule. The enrollment,
    /// its schedule and the fee settlement are stored together.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the student, course, session or plan doesn't exist.
    /// Returns `UseCaseError::Validation` if the session belongs to another course.
    /// Returns a repository conflict if the fee was settled by a concurrent enrollment.
    pub async fn execute(
        &self,
        request: NewEnrollment,
        created_by: Option<UserId>,
    ) -> Result<CreatedEnrollment, UseCaseError> {
        tracing::info!(
            student_id = %request.student_id,
            course_id = %request.course_id,
            "Creating enrollment"
        );
        let today = self.clock.today();

        let student = self
            .student_repository
            .find_by_id(&request.student_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Student", request.student_id))?;
        let course = self
            .course_repository
            .find_by_id(&request.course_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Course", request.course_id))?;
        if let Some(session_id) = &request.session_id {
            let session = self
                .session_repository
                .find_by_id(session_id)
                .await?
                .ok_or_else(|| UseCaseError::not_found("Session", session_id))?;
            if session.course_id() != course.id() {
                return Err(UseCaseError::Validation(vec![
                    "session_id: session does not belong to the selected course".to_string(),
                ]));
            }
        }
        let plan = match &request.payment_plan_id {
            Some(plan_id) => Some(
                self.payment_plan_repository
                    .find_by_id(plan_id)
                    .await?
                    .ok_or_else(|| UseCaseError::not_found("PaymentPlan", plan_id))?,
            ),
            None => None,
        };

        let start_date = request.start_date.unwrap_or(today);
        let enrollment = Enrollment::new(CreateEnrollmentData {
            student_id: request.student_id,
            course_id: request.course_id,
            session_id: request.session_id,
            payment_plan_id: request.payment_plan_id,
            start_date,
            end_date: request.end_date,
        })?;

        let first_enrollment = !student.is_registration_fee_paid();
        let collected = request
            .registration_fee_collected
            .filter(|fee| first_enrollment && *fee > Decimal::ZERO);
        let fee_to_schedule = if first_enrollment && collected.is_none() {
            course.registration_fee()
        } else {
            Decimal::ZERO
        };

        let schedule = match &plan {
            Some(plan) => plan_schedule(&course, plan, start_date, fee_to_schedule)?
                .into_iter()
                .map(|line| Installment::new(*enrollment.id(), line, today))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let settlement = if first_enrollment {
            let ledger_entry = match collected {
                Some(amount) => Some(Transaction::registration_fee_income(
                    amount,
                    format!("Frais d'inscription - {}", student.full_name()),
                    today,
                    Some(*student.id()),
                    created_by,
                )?),
                None => None,
            };
            Some(FeeSettlement {
                student: student.mark_registration_fee_paid(),
                ledger_entry,
            })
        } else {
            None
        };

        let created = self
            .enrollment_repository
            .create(&enrollment, schedule.clone(), settlement)
            .await?;

        tracing::info!(
            enrollment_id = %created.id(),
            installments = schedule.len(),
            first_enrollment,
            "Enrollment created successfully"
        );
        Ok(CreatedEnrollment {
            enrollment: created,
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures;
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::gateways::enrollment_repository::MockEnrollmentRepository;
    use crate::domain::gateways::payment_plan_repository::MockPaymentPlanRepository;
    use crate::domain::gateways::session_repository::MockSessionRepository;
    use crate::domain::gateways::student_repository::MockStudentRepository;
    use crate::domain::models::course::{CourseType, PriceModel};
    use crate::domain::models::student::Student;
    use crate::domain::models::transaction::TransactionSource;
    use crate::shared::errors::RepositoryError;
    use rust_decimal_macros::dec;

    fn use_case(student: Student, enrollments: MockEnrollmentRepository) -> (CreateEnrollmentUseCase, NewEnrollment) {
        let course = fixtures::course(CourseType::TutoringGroup, PriceModel::Monthly, dec!(3000), 3);
        let plan = fixtures::plan(3, 30);
        let request = NewEnrollment {
            student_id: *student.id(),
            course_id: *course.id(),
            session_id: None,
            payment_plan_id: Some(*plan.id()),
            start_date: Some(fixtures::date(2025, 9, 1)),
            end_date: None,
            registration_fee_collected: None,
        };

        let mut students = MockStudentRepository::new();
        students.expect_find_by_id().returning(move |_| Ok(Some(student.clone())));
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(move |_| Ok(Some(course.clone())));
        let mut plans = MockPaymentPlanRepository::new();
        plans.expect_find_by_id().returning(move |_| Ok(Some(plan.clone())));

        let use_case = CreateEnrollmentUseCase::new(
            Arc::new(enrollments),
            Arc::new(students),
            Arc::new(courses),
            Arc::new(MockSessionRepository::new()),
            Arc::new(plans),
            Arc::new(fixtures::clock()),
        );
        (use_case, request)
    }

    #[tokio::test]
    async fn first_enrollment_folds_fee_into_schedule() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_create()
            .times(1)
            .withf(|_, _, settlement| {
                settlement
                    .as_ref()
                    .is_some_and(|s| s.student.is_registration_fee_paid() && s.ledger_entry.is_none())
            })
            .returning(|e, _, _| Ok(e.clone()));

        let (use_case, request) = use_case(fixtures::student("Amel"), enrollments);
        let created = use_case.execute(request, None).await.unwrap();

        let amounts: Vec<Decimal> = created.schedule.iter().map(Installment::amount).collect();
        assert_eq!(amounts, vec![dec!(4500), dec!(3000), dec!(3000)]);
        assert_eq!(created.schedule[2].due_date(), fixtures::date(2025, 10, 31));
    }

    #[tokio::test]
    async fn collected_fee_is_booked_instead_of_scheduled() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_create()
            .times(1)
            .withf(|_, _, settlement| {
                settlement
                    .as_ref()
                    .and_then(|s| s.ledger_entry.as_ref())
                    .is_some_and(|t| t.source() == TransactionSource::RegistrationFee && t.amount() == dec!(1000))
            })
            .returning(|e, _, _| Ok(e.clone()));

        let (use_case, mut request) = use_case(fixtures::student("Amel"), enrollments);
        request.registration_fee_collected = Some(dec!(1000));
        let created = use_case.execute(request, None).await.unwrap();

        assert_eq!(created.schedule[0].amount(), dec!(3000));
    }

    #[tokio::test]
    async fn later_enrollment_leaves_fee_alone() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_create()
            .withf(|_, _, settlement| settlement.is_none())
            .returning(|e, _, _| Ok(e.clone()));

        let returning = fixtures::student("Amel").mark_registration_fee_paid();
        let (use_case, mut request) = use_case(returning, enrollments);
        request.registration_fee_collected = Some(dec!(1000));
        let created = use_case.execute(request, None).await.unwrap();

        let total: Decimal = created.schedule.iter().map(Installment::amount).sum();
        assert_eq!(total, dec!(9000));
    }

    #[tokio::test]
    async fn fee_settled_concurrently_is_a_conflict() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_create()
            .returning(|_, _, _| Err(RepositoryError::Conflict("registration fee already settled".into())));

        let (use_case, request) = use_case(fixtures::student("Amel"), enrollments);
        let result = use_case.execute(request, None).await;

        assert!(matches!(result, Err(UseCaseError::Repository(RepositoryError::Conflict(_)))));
    }
}
