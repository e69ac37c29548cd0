//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method,
//! grouped per aggregate into a bundle the REST layer holds.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod finance;
pub mod payment_plans;
pub mod payment_schedules;
pub mod registrations;
pub mod sessions;
pub mod students;
pub mod trainers;
pub mod transactions;
pub mod users;

#[cfg(test)]
pub(crate) mod fixtures;

pub use auth::AuthUseCases;
pub use courses::CourseUseCases;
pub use dashboard::DashboardUseCases;
pub use enrollments::EnrollmentUseCases;
pub use finance::FinanceUseCases;
pub use payment_plans::PaymentPlanUseCases;
pub use payment_schedules::PaymentScheduleUseCases;
pub use registrations::RegistrationUseCases;
pub use sessions::SessionUseCases;
pub use students::StudentUseCases;
pub use trainers::TrainerUseCases;
pub use transactions::TransactionUseCases;
pub use users::UserUseCases;
