//! Payment Schedule Use Cases
//!
//! Installment schedules, payments against them and the reports built on
//! their status.

mod delete_enrollment_schedule;
mod generate_schedule;
mod get_enrollment_schedule;
mod get_installment_payments;
mod get_overdue_report;
mod get_upcoming_installments;
mod list_schedules;
mod pay_enrollment;
mod pay_installment;
mod refresh_statuses;
mod update_installment;

use std::sync::Arc;

pub use delete_enrollment_schedule::DeleteEnrollmentScheduleUseCase;
pub use generate_schedule::GenerateScheduleUseCase;
pub use get_enrollment_schedule::{EnrollmentSchedule, GetEnrollmentScheduleUseCase};
pub use get_installment_payments::GetInstallmentPaymentsUseCase;
pub use get_overdue_report::GetOverdueReportUseCase;
pub use get_upcoming_installments::{GetUpcomingInstallmentsUseCase, DEFAULT_UPCOMING_DAYS};
pub use list_schedules::ListSchedulesUseCase;
pub use pay_enrollment::{EnrollmentPayment, PayEnrollmentUseCase};
pub use pay_installment::{PayInstallmentUseCase, PaymentInput};
pub use refresh_statuses::RefreshStatusesUseCase;
pub use update_installment::UpdateInstallmentUseCase;

use crate::domain::gateways::{
    Clock, CourseRepository, EnrollmentRepository, InstallmentRepository, PaymentRepository,
};

pub struct PaymentScheduleUseCases {
    pub generate: GenerateScheduleUseCase,
    pub enrollment_schedule: GetEnrollmentScheduleUseCase,
    pub list: ListSchedulesUseCase,
    pub overdue: GetOverdueReportUseCase,
    pub upcoming: GetUpcomingInstallmentsUseCase,
    pub pay_installment: PayInstallmentUseCase,
    pub installment_payments: GetInstallmentPaymentsUseCase,
    pub update_installment: UpdateInstallmentUseCase,
    pub delete_schedule: DeleteEnrollmentScheduleUseCase,
    pub pay_enrollment: PayEnrollmentUseCase,
    pub refresh_statuses: RefreshStatusesUseCase,
}

pub struct PaymentScheduleDeps {
    pub installments: Arc<dyn InstallmentRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub clock: Arc<dyn Clock>,
}

impl PaymentScheduleUseCases {
    #[must_use]
    pub fn new(deps: &PaymentScheduleDeps) -> Self {
        let installments = &deps.installments;
        let clock = &deps.clock;
        Self {
            generate: GenerateScheduleUseCase::new(
                installments.clone(),
                deps.enrollments.clone(),
                deps.courses.clone(),
                clock.clone(),
            ),
            enrollment_schedule: GetEnrollmentScheduleUseCase::new(installments.clone(), clock.clone()),
            list: ListSchedulesUseCase::new(installments.clone(), clock.clone()),
            overdue: GetOverdueReportUseCase::new(installments.clone(), clock.clone()),
            upcoming: GetUpcomingInstallmentsUseCase::new(installments.clone(), clock.clone()),
            pay_installment: PayInstallmentUseCase::new(installments.clone(), deps.enrollments.clone(), clock.clone()),
            installment_payments: GetInstallmentPaymentsUseCase::new(installments.clone(), deps.payments.clone()),
            update_installment: UpdateInstallmentUseCase::new(installments.clone(), clock.clone()),
            delete_schedule: DeleteEnrollmentScheduleUseCase::new(installments.clone(), deps.payments.clone()),
            pay_enrollment: PayEnrollmentUseCase::new(installments.clone(), deps.enrollments.clone(), clock.clone()),
            refresh_statuses: RefreshStatusesUseCase::new(installments.clone(), clock.clone()),
        }
    }
}
