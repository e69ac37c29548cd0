//! Enrollment Use Cases

mod create_enrollment;
mod delete_enrollment;
mod get_enrollment_by_id;
mod list_enrollments;
mod update_enrollment_status;

use std::sync::Arc;

pub use create_enrollment::{CreateEnrollmentUseCase, CreatedEnrollment, NewEnrollment};
pub use delete_enrollment::DeleteEnrollmentUseCase;
pub use get_enrollment_by_id::GetEnrollmentByIdUseCase;
pub use list_enrollments::ListEnrollmentsUseCase;
pub use update_enrollment_status::UpdateEnrollmentStatusUseCase;

use crate::domain::gateways::{
    Clock, CourseRepository, EnrollmentRepository, PaymentPlanRepository, SessionRepository, StudentRepository,
};

pub struct EnrollmentUseCases {
    pub create: CreateEnrollmentUseCase,
    pub list: ListEnrollmentsUseCase,
    pub get: GetEnrollmentByIdUseCase,
    pub update_status: UpdateEnrollmentStatusUseCase,
    pub delete: DeleteEnrollmentUseCase,
}

pub struct EnrollmentDeps {
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub payment_plans: Arc<dyn PaymentPlanRepository>,
    pub clock: Arc<dyn Clock>,
}

impl EnrollmentUseCases {
    #[must_use]
    pub fn new(deps: &EnrollmentDeps) -> Self {
        Self {
            create: CreateEnrollmentUseCase::new(
                deps.enrollments.clone(),
                deps.students.clone(),
                deps.courses.clone(),
                deps.sessions.clone(),
                deps.payment_plans.clone(),
                deps.clock.clone(),
            ),
            list: ListEnrollmentsUseCase::new(deps.enrollments.clone()),
            get: GetEnrollmentByIdUseCase::new(deps.enrollments.clone()),
            update_status: UpdateEnrollmentStatusUseCase::new(deps.enrollments.clone()),
            delete: DeleteEnrollmentUseCase::new(deps.enrollments.clone()),
        }
    }
}
