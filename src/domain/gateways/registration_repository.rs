//! Registration Repository Gateway

use async_trait::async_trait;

use crate::domain::models::enrollment::Enrollment;
use crate::domain::models::ids::RegistrationId;
use crate::domain::models::installment::Installment;
use crate::domain::models::registration::{Registration, RegistrationStatus};
use crate::domain::models::student::Student;
use crate::domain::models::transaction::Transaction;
use crate::shared::errors::RepositoryError;

/// Rows written when a pending registration is validated
#[derive(Debug, Clone)]
pub struct RegistrationValidation {
    pub registration: Registration,
    pub student: Student,
    pub enrollment: Enrollment,
    pub schedule: Vec<Installment>,
}

/// Repository trait for registration requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, RepositoryError>;

    /// List registrations, newest first, optionally in one status
    async fn find_all(&self, status: Option<RegistrationStatus>) -> Result<Vec<Registration>, RepositoryError>;

    async fn count_by_status(&self, status: RegistrationStatus) -> Result<i64, RepositoryError>;

    async fn create(&self, registration: &Registration) -> Result<Registration, RepositoryError>;

    async fn update(&self, registration: &Registration) -> Result<Option<Registration>, RepositoryError>;

    async fn delete(&self, id: &RegistrationId) -> Result<bool, RepositoryError>;

    /// Store a collected fee with its ledger entry in one transaction
    ///
    /// Fails with `RepositoryError::Conflict` if the fee was collected or the
    /// registration rejected since it was read.
    async fn record_fee_payment(
        &self,
        registration: &Registration,
        ledger_entry: Option<Transaction>,
    ) -> Result<Registration, RepositoryError>;

    /// Insert the student, the enrollment and its schedule, then mark the
    /// registration validated, all in one transaction
    ///
    /// Fails with `RepositoryError::Conflict` if the registration is no
    /// longer pending.
    async fn complete_validation(&self, validation: RegistrationValidation) -> Result<Registration, RepositoryError>;
}
