//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod course;
pub mod enrollment;
pub mod ids;
pub mod installment;
pub(crate) mod labels;
pub mod payment;
pub mod payment_plan;
pub mod registration;
pub mod rules;
pub mod session;
pub mod student;
pub mod trainer;
pub mod transaction;
pub mod user;

pub use course::{Course, CourseType, CreateCourseData, PriceModel, UpdateCourseData};
pub use enrollment::{CreateEnrollmentData, Enrollment, EnrollmentStatus};
pub use ids::{
    CourseId, EnrollmentId, InstallmentId, PaymentId, PaymentPlanId, RegistrationId, SessionId,
    StudentId, TrainerId, TransactionId, UserId,
};
pub use installment::{Installment, InstallmentStatus, UpdateInstallmentData};
pub use payment::{CreatePaymentData, Payment, PaymentMethod};
pub use payment_plan::{CreatePaymentPlanData, PaymentPlan, UpdatePaymentPlanData};
pub use registration::{
    CreateRegistrationData, Registration, RegistrationStatus, UpdateRegistrationData,
};
pub use session::{CreateSessionData, Session, SessionStatus, UpdateSessionData};
pub use student::{CreateStudentData, Student, UpdateStudentData};
pub use trainer::{CreateTrainerData, Trainer, UpdateTrainerData};
pub use transaction::{CreateTransactionData, Transaction, TransactionSource, TransactionType};
pub use user::{CreateUserData, UpdateUserData, User, UserRole};
