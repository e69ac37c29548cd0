//! Installment Repository Gateway
//!
//! Installments live in the `payment_schedules` table. Recording a payment
//! touches installments, payments and the ledger at once, so that write is
//! a single repository call.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::finance::ScheduleLine;
use crate::domain::models::ids::{CourseId, EnrollmentId, InstallmentId, StudentId};
use crate::domain::models::installment::Installment;
use crate::domain::models::payment::Payment;
use crate::domain::models::transaction::Transaction;
use crate::shared::errors::RepositoryError;

/// Narrows [`InstallmentRepository::find_lines`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub student_id: Option<StudentId>,
    pub enrollment_id: Option<EnrollmentId>,
    pub course_id: Option<CourseId>,
}

/// Everything written when money is applied to one installment
#[derive(Debug, Clone)]
pub struct RecordedPayment {
    pub installment: Installment,
    /// Paid amount the installment held when the payment was applied
    pub previous_paid_amount: Decimal,
    pub payment: Payment,
    pub transaction: Transaction,
}

/// Repository trait for installment schedules
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstallmentRepository: Send + Sync {
    /// Find an installment by its ID
    async fn find_by_id(&self, id: &InstallmentId) -> Result<Option<Installment>, RepositoryError>;

    /// All installments of an enrollment, by installment number
    async fn find_by_enrollment(&self, enrollment_id: &EnrollmentId) -> Result<Vec<Installment>, RepositoryError>;

    /// Installments joined with their student and course, by due date
    async fn find_lines(&self, filter: ScheduleFilter) -> Result<Vec<ScheduleLine>, RepositoryError>;

    /// Insert a whole schedule in one transaction
    async fn create_many(&self, installments: Vec<Installment>) -> Result<Vec<Installment>, RepositoryError>;

    /// Update amount, due date, notes and status of one installment
    async fn update(&self, installment: &Installment) -> Result<Option<Installment>, RepositoryError>;

    /// Persist the status of each given installment; returns rows changed
    async fn update_statuses(&self, installments: Vec<Installment>) -> Result<u64, RepositoryError>;

    /// Delete every installment of an enrollment; returns rows deleted
    async fn delete_by_enrollment(&self, enrollment_id: &EnrollmentId) -> Result<u64, RepositoryError>;

    /// Atomically store updated installments with their payments and ledger entries
    ///
    /// Fails with `RepositoryError::Conflict` when an installment was paid
    /// by someone else since it was read.
    async fn record_payments(&self, entries: Vec<RecordedPayment>) -> Result<(), RepositoryError>;
}
