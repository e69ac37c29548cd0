//! PostgreSQL Installment Repository Implementation
//!
//! Installments live in the `payment_schedules` table. Payment recording
//! writes the installment, its payment row and the matching ledger entry in
//! a single database transaction.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::finance::ScheduleLine;
use crate::domain::gateways::{InstallmentRepository, RecordedPayment, ScheduleFilter};
use crate::domain::models::ids::{CourseId, EnrollmentId, InstallmentId, StudentId};
use crate::domain::models::installment::Installment;
use crate::infrastructure::driven_adapters::database::parse_code;
use crate::infrastructure::driven_adapters::payment_repository::insert_payment;
use crate::infrastructure::driven_adapters::transaction_repository::insert_transaction;
use crate::shared::errors::RepositoryError;

/// Database row representation for payment_schedules table
#[derive(Debug, sqlx::FromRow)]
struct InstallmentRow {
    id: Uuid,
    enrollment_id: Uuid,
    installment_number: i32,
    amount: Decimal,
    due_date: NaiveDate,
    paid_amount: Decimal,
    paid_date: Option<NaiveDate>,
    payment_method: Option<String>,
    status: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<InstallmentRow> for Installment {
    type Error = RepositoryError;

    fn try_from(row: InstallmentRow) -> Result<Self, Self::Error> {
        let payment_method = row
            .payment_method
            .as_deref()
            .map(|m| parse_code("payment_schedules.payment_method", m))
            .transpose()?;

        Ok(Installment::restore(
            InstallmentId::from_uuid(row.id),
            EnrollmentId::from_uuid(row.enrollment_id),
            row.installment_number,
            row.amount,
            row.due_date,
            row.paid_amount,
            row.paid_date,
            payment_method,
            parse_code("payment_schedules.status", &row.status)?,
            row.notes,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// An installment joined with its student and course
#[derive(Debug, sqlx::FromRow)]
struct ScheduleLineRow {
    #[sqlx(flatten)]
    installment: InstallmentRow,
    student_id: Uuid,
    student_name: String,
    course_id: Uuid,
    course_title: String,
}

impl TryFrom<ScheduleLineRow> for ScheduleLine {
    type Error = RepositoryError;

    fn try_from(row: ScheduleLineRow) -> Result<Self, Self::Error> {
        Ok(ScheduleLine {
            installment: Installment::try_from(row.installment)?,
            student_id: StudentId::from_uuid(row.student_id),
            student_name: row.student_name,
            course_id: CourseId::from_uuid(row.course_id),
            course_title: row.course_title,
        })
    }
}

/// Insert a schedule on an open connection; shared with enrollment creation
pub(crate) async fn insert_installments(
    conn: &mut PgConnection,
    installments: &[Installment],
) -> Result<Vec<Installment>, RepositoryError> {
    let mut saved = Vec::with_capacity(installments.len());
    for installment in installments {
        let row = sqlx::query_as::<_, InstallmentRow>(
            r"
            INSERT INTO payment_schedules (
                id, enrollment_id, installment_number, amount, due_date, paid_amount,
                paid_date, payment_method, status, notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, enrollment_id, installment_number, amount, due_date, paid_amount,
                      paid_date, payment_method, status, notes, created_at, updated_at
            ",
        )
        .bind(installment.id().as_uuid())
        .bind(installment.enrollment_id().as_uuid())
        .bind(installment.installment_number())
        .bind(installment.amount())
        .bind(installment.due_date())
        .bind(installment.paid_amount())
        .bind(installment.paid_date())
        .bind(installment.payment_method().map(|m| m.code()))
        .bind(installment.status().code())
        .bind(installment.notes())
        .bind(installment.created_at())
        .bind(installment.updated_at())
        .fetch_one(&mut *conn)
        .await?;
        saved.push(Installment::try_from(row)?);
    }
    Ok(saved)
}

/// Write the paid state only if nobody paid the installment in between
async fn store_payment_state(conn: &mut PgConnection, entry: &RecordedPayment) -> Result<(), RepositoryError> {
    let installment = &entry.installment;
    let result = sqlx::query(
        r"
        UPDATE payment_schedules
        SET paid_amount = $2,
            paid_date = $3,
            payment_method = $4,
            status = $5,
            updated_at = $6
        WHERE id = $1 AND paid_amount = $7
        ",
    )
    .bind(installment.id().as_uuid())
    .bind(installment.paid_amount())
    .bind(installment.paid_date())
    .bind(installment.payment_method().map(|m| m.code()))
    .bind(installment.status().code())
    .bind(installment.updated_at())
    .bind(entry.previous_paid_amount)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM payment_schedules WHERE id = $1)")
            .bind(installment.id().as_uuid())
            .fetch_one(&mut *conn)
            .await?;
        return Err(if exists {
            RepositoryError::Conflict(format!("installment {} was paid concurrently", installment.id()))
        } else {
            RepositoryError::NotFound(installment.id().to_string())
        });
    }
    Ok(())
}

/// PostgreSQL implementation of InstallmentRepository
pub struct PostgresInstallmentRepository {
    pool: PgPool,
}

impl PostgresInstallmentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstallmentRepository for PostgresInstallmentRepository {
    async fn find_by_id(&self, id: &InstallmentId) -> Result<Option<Installment>, RepositoryError> {
        let row = sqlx::query_as::<_, InstallmentRow>(
            r"
            SELECT id, enrollment_id, installment_number, amount, due_date, paid_amount,
                   paid_date, payment_method, status, notes, created_at, updated_at
            FROM payment_schedules
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Installment::try_from).transpose()
    }

    async fn find_by_enrollment(&self, enrollment_id: &EnrollmentId) -> Result<Vec<Installment>, RepositoryError> {
        let rows = sqlx::query_as::<_, InstallmentRow>(
            r"
            SELECT id, enrollment_id, installment_number, amount, due_date, paid_amount,
                   paid_date, payment_method, status, notes, created_at, updated_at
            FROM payment_schedules
            WHERE enrollment_id = $1
            ORDER BY installment_number ASC
            ",
        )
        .bind(enrollment_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Installment::try_from).collect()
    }

    async fn find_lines(&self, filter: ScheduleFilter) -> Result<Vec<ScheduleLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, ScheduleLineRow>(
            r"
            SELECT ps.id, ps.enrollment_id, ps.installment_number, ps.amount, ps.due_date,
                   ps.paid_amount, ps.paid_date, ps.payment_method, ps.status, ps.notes,
                   ps.created_at, ps.updated_at,
                   st.id AS student_id,
                   st.first_name || ' ' || st.last_name AS student_name,
                   c.id AS course_id,
                   c.title AS course_title
            FROM payment_schedules ps
            JOIN enrollments e ON e.id = ps.enrollment_id
            JOIN students st ON st.id = e.student_id
            JOIN courses c ON c.id = e.course_id
            WHERE ($1::UUID IS NULL OR e.student_id = $1)
              AND ($2::UUID IS NULL OR ps.enrollment_id = $2)
              AND ($3::UUID IS NULL OR e.course_id = $3)
            ORDER BY ps.due_date ASC, ps.installment_number ASC
            ",
        )
        .bind(filter.student_id.map(|id| *id.as_uuid()))
        .bind(filter.enrollment_id.map(|id| *id.as_uuid()))
        .bind(filter.course_id.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ScheduleLine::try_from).collect()
    }

    async fn create_many(&self, installments: Vec<Installment>) -> Result<Vec<Installment>, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let saved = insert_installments(&mut tx, &installments).await?;
        tx.commit().await?;
        Ok(saved)
    }

    async fn update(&self, installment: &Installment) -> Result<Option<Installment>, RepositoryError> {
        let row = sqlx::query_as::<_, InstallmentRow>(
            r"
            UPDATE payment_schedules
            SET amount = $2,
                due_date = $3,
                notes = $4,
                status = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING id, enrollment_id, installment_number, amount, due_date, paid_amount,
                      paid_date, payment_method, status, notes, created_at, updated_at
            ",
        )
        .bind(installment.id().as_uuid())
        .bind(installment.amount())
        .bind(installment.due_date())
        .bind(installment.notes())
        .bind(installment.status().code())
        .bind(installment.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Installment::try_from).transpose()
    }

    async fn update_statuses(&self, installments: Vec<Installment>) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let mut changed = 0;
        for installment in &installments {
            let result = sqlx::query(
                r"
                UPDATE payment_schedules
                SET status = $2, updated_at = $3
                WHERE id = $1 AND status <> $2
                ",
            )
            .bind(installment.id().as_uuid())
            .bind(installment.status().code())
            .bind(installment.updated_at())
            .execute(&mut *tx)
            .await?;
            changed += result.rows_affected();
        }
        tx.commit().await?;
        Ok(changed)
    }

    async fn delete_by_enrollment(&self, enrollment_id: &EnrollmentId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM payment_schedules WHERE enrollment_id = $1")
            .bind(enrollment_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn record_payments(&self, entries: Vec<RecordedPayment>) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        for entry in &entries {
            store_payment_state(&mut tx, entry).await?;
            insert_payment(&mut *tx, &entry.payment).await?;
            insert_transaction(&mut *tx, &entry.transaction).await?;
        }
        tx.commit().await?;

        tracing::debug!(count = entries.len(), "Recorded installment payments");
        Ok(())
    }
}
