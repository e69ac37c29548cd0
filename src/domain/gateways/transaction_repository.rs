//! Ledger Transaction Repository Gateway

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::ids::{StudentId, TransactionId};
use crate::domain::models::transaction::{Transaction, TransactionSource, TransactionType};
use crate::shared::errors::RepositoryError;

/// Narrows [`TransactionRepository::find_all`]; date bounds are inclusive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub transaction_type: Option<TransactionType>,
    pub source: Option<TransactionSource>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub student_id: Option<StudentId>,
}

/// Repository trait for the ledger
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn find_by_id(&self, id: &TransactionId) -> Result<Option<Transaction>, RepositoryError>;

    /// Matching entries, newest transaction date first
    async fn find_all(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, RepositoryError>;

    async fn create(&self, transaction: &Transaction) -> Result<Transaction, RepositoryError>;

    async fn delete(&self, id: &TransactionId) -> Result<bool, RepositoryError>;
}
