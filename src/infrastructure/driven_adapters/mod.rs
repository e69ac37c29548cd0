//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL repositories
//! - Password hashing, token signing and the system clock
//! - Configuration

pub mod clock;
pub mod config;
pub mod course_repository;
pub mod database;
pub mod enrollment_repository;
pub mod installment_repository;
pub mod password_hasher;
pub mod payment_plan_repository;
pub mod payment_repository;
pub mod registration_repository;
pub mod session_repository;
pub mod student_repository;
pub mod token;
pub mod trainer_repository;
pub mod transaction_repository;
pub mod user_repository;

pub use clock::SystemClock;
pub use config::AppConfig;
pub use course_repository::PostgresCourseRepository;
pub use enrollment_repository::PostgresEnrollmentRepository;
pub use installment_repository::PostgresInstallmentRepository;
pub use password_hasher::Argon2PasswordHasher;
pub use payment_plan_repository::PostgresPaymentPlanRepository;
pub use payment_repository::PostgresPaymentRepository;
pub use registration_repository::PostgresRegistrationRepository;
pub use session_repository::PostgresSessionRepository;
pub use student_repository::PostgresStudentRepository;
pub use trainer_repository::PostgresTrainerRepository;
pub use transaction_repository::PostgresTransactionRepository;
pub use user_repository::PostgresUserRepository;
