//! Payment Repository Gateway
//!
//! Payments are written through `InstallmentRepository::record_payments`;
//! this trait only reads them.

use async_trait::async_trait;

use crate::domain::models::ids::{EnrollmentId, InstallmentId, StudentId};
use crate::domain::models::payment::Payment;
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Payments applied to one installment, oldest first
    async fn find_by_installment(&self, installment_id: &InstallmentId) -> Result<Vec<Payment>, RepositoryError>;

    /// Payments made by a student, newest first
    async fn find_by_student(&self, student_id: &StudentId) -> Result<Vec<Payment>, RepositoryError>;

    /// Number of payments recorded on an enrollment
    async fn count_by_enrollment(&self, enrollment_id: &EnrollmentId) -> Result<i64, RepositoryError>;
}
