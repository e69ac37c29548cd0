//! Enrollment Repository Gateway

use async_trait::async_trait;

use crate::domain::models::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::models::ids::{EnrollmentId, StudentId};
use crate::domain::models::installment::Installment;
use crate::domain::models::student::Student;
use crate::domain::models::transaction::Transaction;
use crate::shared::errors::RepositoryError;

/// Registration fee settled together with a student's first enrollment
#[derive(Debug, Clone)]
pub struct FeeSettlement {
    pub student: Student,
    /// Ledger income when the fee was handed over at the desk
    pub ledger_entry: Option<Transaction>,
}

/// Repository trait for enrollments
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find an enrollment by its ID
    async fn find_by_id(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, RepositoryError>;

    /// List enrollments, newest first, optionally for one student
    async fn find_all(&self, student_id: Option<StudentId>) -> Result<Vec<Enrollment>, RepositoryError>;

    /// Number of enrollments in the given status
    async fn count_by_status(&self, status: EnrollmentStatus) -> Result<i64, RepositoryError>;

    /// Insert an enrollment, its initial schedule and the optional fee
    /// settlement in one transaction
    ///
    /// Fails with `RepositoryError::Conflict` when the student's fee was
    /// settled by another request in between.
    async fn create(
        &self,
        enrollment: &Enrollment,
        schedule: Vec<Installment>,
        settlement: Option<FeeSettlement>,
    ) -> Result<Enrollment, RepositoryError>;

    /// Update an existing enrollment
    async fn update(&self, enrollment: &Enrollment) -> Result<Option<Enrollment>, RepositoryError>;

    /// Delete an enrollment with its installments and payments
    async fn delete(&self, id: &EnrollmentId) -> Result<bool, RepositoryError>;
}
