//! PostgreSQL Payment Repository Implementation
//!
//! Payments are only written alongside their installment update, see
//! `insert_payment` and the installment repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::domain::gateways::PaymentRepository;
use crate::domain::models::ids::{EnrollmentId, InstallmentId, PaymentId, StudentId, UserId};
use crate::domain::models::payment::Payment;
use crate::infrastructure::driven_adapters::database::parse_code;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    installment_id: Option<Uuid>,
    enrollment_id: Uuid,
    student_id: Uuid,
    amount: Decimal,
    payment_method: String,
    payment_date: NaiveDate,
    reference: Option<String>,
    received_by: Option<Uuid>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = RepositoryError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        Ok(Payment::restore(
            PaymentId::from_uuid(row.id),
            row.installment_id.map(InstallmentId::from_uuid),
            EnrollmentId::from_uuid(row.enrollment_id),
            StudentId::from_uuid(row.student_id),
            row.amount,
            parse_code("payments.payment_method", &row.payment_method)?,
            row.payment_date,
            row.reference,
            row.received_by.map(UserId::from_uuid),
            row.notes,
            row.created_at,
        ))
    }
}

pub(crate) async fn insert_payment<'e, E>(executor: E, payment: &Payment) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r"
        INSERT INTO payments (
            id, installment_id, enrollment_id, student_id, amount, payment_method,
            payment_date, reference, received_by, notes, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ",
    )
    .bind(payment.id().as_uuid())
    .bind(payment.installment_id().map(|id| *id.as_uuid()))
    .bind(payment.enrollment_id().as_uuid())
    .bind(payment.student_id().as_uuid())
    .bind(payment.amount())
    .bind(payment.payment_method().code())
    .bind(payment.payment_date())
    .bind(payment.reference())
    .bind(payment.received_by().map(|id| *id.as_uuid()))
    .bind(payment.notes())
    .bind(payment.created_at())
    .execute(executor)
    .await?;

    Ok(())
}

pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn find_by_installment(&self, installment_id: &InstallmentId) -> Result<Vec<Payment>, RepositoryError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r"
            SELECT id, installment_id, enrollment_id, student_id, amount, payment_method,
                   payment_date, reference, received_by, notes, created_at
            FROM payments
            WHERE installment_id = $1
            ORDER BY payment_date ASC, created_at ASC
            ",
        )
        .bind(installment_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn find_by_student(&self, student_id: &StudentId) -> Result<Vec<Payment>, RepositoryError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r"
            SELECT id, installment_id, enrollment_id, student_id, amount, payment_method,
                   payment_date, reference, received_by, notes, created_at
            FROM payments
            WHERE student_id = $1
            ORDER BY payment_date DESC, created_at DESC
            ",
        )
        .bind(student_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn count_by_enrollment(&self, enrollment_id: &EnrollmentId) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payments WHERE enrollment_id = $1")
            .bind(enrollment_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
