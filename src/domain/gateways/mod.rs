//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod clock;
pub mod course_repository;
pub mod enrollment_repository;
pub mod installment_repository;
pub mod password_hasher;
pub mod payment_plan_repository;
pub mod payment_repository;
pub mod registration_repository;
pub mod session_repository;
pub mod student_repository;
pub mod trainer_repository;
pub mod transaction_repository;
pub mod user_repository;

pub use clock::Clock;
pub use course_repository::CourseRepository;
pub use enrollment_repository::{EnrollmentRepository, FeeSettlement};
pub use installment_repository::{InstallmentRepository, RecordedPayment, ScheduleFilter};
pub use password_hasher::PasswordHasher;
pub use payment_plan_repository::PaymentPlanRepository;
pub use payment_repository::PaymentRepository;
pub use registration_repository::{RegistrationRepository, RegistrationValidation};
pub use session_repository::SessionRepository;
pub use student_repository::StudentRepository;
pub use trainer_repository::TrainerRepository;
pub use transaction_repository::{TransactionFilter, TransactionRepository};
pub use user_repository::UserRepository;
