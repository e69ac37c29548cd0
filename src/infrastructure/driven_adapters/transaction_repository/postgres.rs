//! PostgreSQL Transaction (Ledger) Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::domain::gateways::{TransactionFilter, TransactionRepository};
use crate::domain::models::ids::{PaymentId, StudentId, TransactionId, UserId};
use crate::domain::models::transaction::{Transaction, TransactionSource, TransactionType};
use crate::infrastructure::driven_adapters::database::parse_code;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    transaction_type: String,
    source: String,
    amount: Decimal,
    description: Option<String>,
    motif: Option<String>,
    transaction_date: NaiveDate,
    student_id: Option<Uuid>,
    payment_id: Option<Uuid>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = RepositoryError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Transaction::restore(
            TransactionId::from_uuid(row.id),
            parse_code("transactions.type", &row.transaction_type)?,
            parse_code("transactions.source", &row.source)?,
            row.amount,
            row.description,
            row.motif,
            row.transaction_date,
            row.student_id.map(StudentId::from_uuid),
            row.payment_id.map(PaymentId::from_uuid),
            row.created_by.map(UserId::from_uuid),
            row.created_at,
            row.updated_at,
        ))
    }
}

/// Insert one ledger entry; shared with the payment recording transaction
pub(crate) async fn insert_transaction<'e, E>(
    executor: E,
    transaction: &Transaction,
) -> Result<Transaction, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, TransactionRow>(
        r"
        INSERT INTO transactions (
            id, type, source, amount, description, motif, transaction_date,
            student_id, payment_id, created_by, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING id, type AS transaction_type, source, amount, description, motif,
                  transaction_date, student_id, payment_id, created_by, created_at, updated_at
        ",
    )
    .bind(transaction.id().as_uuid())
    .bind(transaction.transaction_type().code())
    .bind(transaction.source().code())
    .bind(transaction.amount())
    .bind(transaction.description())
    .bind(transaction.motif())
    .bind(transaction.transaction_date())
    .bind(transaction.student_id().map(|id| *id.as_uuid()))
    .bind(transaction.payment_id().map(|id| *id.as_uuid()))
    .bind(transaction.created_by().map(|id| *id.as_uuid()))
    .bind(transaction.created_at())
    .bind(transaction.updated_at())
    .fetch_one(executor)
    .await?;

    Transaction::try_from(row)
}

pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn find_by_id(&self, id: &TransactionId) -> Result<Option<Transaction>, RepositoryError> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r"
            SELECT id, type AS transaction_type, source, amount, description, motif,
                   transaction_date, student_id, payment_id, created_by, created_at, updated_at
            FROM transactions
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Transaction::try_from).transpose()
    }

    async fn find_all(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, RepositoryError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r"
            SELECT id, type AS transaction_type, source, amount, description, motif,
                   transaction_date, student_id, payment_id, created_by, created_at, updated_at
            FROM transactions
            WHERE ($1::TEXT IS NULL OR type = $1)
              AND ($2::TEXT IS NULL OR source = $2)
              AND ($3::DATE IS NULL OR transaction_date >= $3)
              AND ($4::DATE IS NULL OR transaction_date <= $4)
              AND ($5::UUID IS NULL OR student_id = $5)
            ORDER BY transaction_date DESC, created_at DESC
            ",
        )
        .bind(filter.transaction_type.map(TransactionType::code))
        .bind(filter.source.map(TransactionSource::code))
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.student_id.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn create(&self, transaction: &Transaction) -> Result<Transaction, RepositoryError> {
        insert_transaction(&self.pool, transaction).await
    }

    async fn delete(&self, id: &TransactionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
