//! PostgreSQL Registration Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::gateways::{RegistrationRepository, RegistrationValidation};
use crate::domain::models::ids::{CourseId, RegistrationId, SessionId, StudentId, UserId};
use crate::domain::models::registration::{Registration, RegistrationStatus};
use crate::domain::models::transaction::Transaction;
use crate::infrastructure::driven_adapters::database::parse_code;
use crate::infrastructure::driven_adapters::enrollment_repository::insert_enrollment;
use crate::infrastructure::driven_adapters::installment_repository::insert_installments;
use crate::infrastructure::driven_adapters::student_repository::insert_student;
use crate::infrastructure::driven_adapters::transaction_repository::insert_transaction;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct RegistrationRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    course_id: Uuid,
    session_id: Option<Uuid>,
    status: String,
    notes: Option<String>,
    registration_fee: Decimal,
    registration_fee_paid: bool,
    registration_fee_paid_at: Option<DateTime<Utc>>,
    student_id: Option<Uuid>,
    validated_at: Option<DateTime<Utc>>,
    validated_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = RepositoryError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Registration::restore(
            RegistrationId::from_uuid(row.id),
            row.first_name,
            row.last_name,
            row.email,
            row.phone,
            CourseId::from_uuid(row.course_id),
            row.session_id.map(SessionId::from_uuid),
            parse_code("registrations.status", &row.status)?,
            row.notes,
            row.registration_fee,
            row.registration_fee_paid,
            row.registration_fee_paid_at,
            row.student_id.map(StudentId::from_uuid),
            row.validated_at,
            row.validated_by.map(UserId::from_uuid),
            row.created_at,
            row.updated_at,
        ))
    }
}

/// Tell a concurrent change apart from a deleted row after a guarded update
async fn stale_write(conn: &mut PgConnection, id: &RegistrationId, reason: &str) -> RepositoryError {
    match sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM registrations WHERE id = $1)")
        .bind(id.as_uuid())
        .fetch_one(&mut *conn)
        .await
    {
        Ok(true) => RepositoryError::Conflict(format!("registration {id} {reason}")),
        Ok(false) => RepositoryError::NotFound(id.to_string()),
        Err(err) => RepositoryError::from(err),
    }
}

pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, RepositoryError> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r"
            SELECT id, first_name, last_name, email, phone, course_id, session_id, status, notes,
                   registration_fee, registration_fee_paid, registration_fee_paid_at,
                   student_id, validated_at, validated_by, created_at, updated_at
            FROM registrations
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Registration::try_from).transpose()
    }

    async fn find_all(&self, status: Option<RegistrationStatus>) -> Result<Vec<Registration>, RepositoryError> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            r"
            SELECT id, first_name, last_name, email, phone, course_id, session_id, status, notes,
                   registration_fee, registration_fee_paid, registration_fee_paid_at,
                   student_id, validated_at, validated_by, created_at, updated_at
            FROM registrations
            WHERE $1::TEXT IS NULL OR status = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(status.map(RegistrationStatus::code))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Registration::try_from).collect()
    }

    async fn count_by_status(&self, status: RegistrationStatus) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registrations WHERE status = $1")
            .bind(status.code())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(&self, registration: &Registration) -> Result<Registration, RepositoryError> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r"
            INSERT INTO registrations (
                id, first_name, last_name, email, phone, course_id, session_id, status, notes,
                registration_fee, registration_fee_paid, registration_fee_paid_at,
                student_id, validated_at, validated_by, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id, first_name, last_name, email, phone, course_id, session_id, status, notes,
                      registration_fee, registration_fee_paid, registration_fee_paid_at,
                      student_id, validated_at, validated_by, created_at, updated_at
            ",
        )
        .bind(registration.id().as_uuid())
        .bind(registration.first_name())
        .bind(registration.last_name())
        .bind(registration.email())
        .bind(registration.phone())
        .bind(registration.course_id().as_uuid())
        .bind(registration.session_id().map(|id| *id.as_uuid()))
        .bind(registration.status().code())
        .bind(registration.notes())
        .bind(registration.registration_fee())
        .bind(registration.registration_fee_paid())
        .bind(registration.registration_fee_paid_at())
        .bind(registration.student_id().map(|id| *id.as_uuid()))
        .bind(registration.validated_at())
        .bind(registration.validated_by().map(|id| *id.as_uuid()))
        .bind(registration.created_at())
        .bind(registration.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Registration::try_from(row)
    }

    async fn update(&self, registration: &Registration) -> Result<Option<Registration>, RepositoryError> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r"
            UPDATE registrations
            SET first_name = $2,
                last_name = $3,
                email = $4,
                phone = $5,
                course_id = $6,
                session_id = $7,
                status = $8,
                notes = $9,
                registration_fee = $10,
                registration_fee_paid = $11,
                registration_fee_paid_at = $12,
                student_id = $13,
                validated_at = $14,
                validated_by = $15,
                updated_at = $16
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone, course_id, session_id, status, notes,
                      registration_fee, registration_fee_paid, registration_fee_paid_at,
                      student_id, validated_at, validated_by, created_at, updated_at
            ",
        )
        .bind(registration.id().as_uuid())
        .bind(registration.first_name())
        .bind(registration.last_name())
        .bind(registration.email())
        .bind(registration.phone())
        .bind(registration.course_id().as_uuid())
        .bind(registration.session_id().map(|id| *id.as_uuid()))
        .bind(registration.status().code())
        .bind(registration.notes())
        .bind(registration.registration_fee())
        .bind(registration.registration_fee_paid())
        .bind(registration.registration_fee_paid_at())
        .bind(registration.student_id().map(|id| *id.as_uuid()))
        .bind(registration.validated_at())
        .bind(registration.validated_by().map(|id| *id.as_uuid()))
        .bind(registration.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Registration::try_from).transpose()
    }

    async fn delete(&self, id: &RegistrationId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_fee_payment(
        &self,
        registration: &Registration,
        ledger_entry: Option<Transaction>,
    ) -> Result<Registration, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, RegistrationRow>(
            r"
            UPDATE registrations
            SET registration_fee_paid = TRUE,
                registration_fee_paid_at = $2,
                updated_at = $3
            WHERE id = $1 AND registration_fee_paid = FALSE AND status <> $4
            RETURNING id, first_name, last_name, email, phone, course_id, session_id, status, notes,
                      registration_fee, registration_fee_paid, registration_fee_paid_at,
                      student_id, validated_at, validated_by, created_at, updated_at
            ",
        )
        .bind(registration.id().as_uuid())
        .bind(registration.registration_fee_paid_at())
        .bind(registration.updated_at())
        .bind(RegistrationStatus::Rejected.code())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(stale_write(&mut tx, registration.id(), "fee was collected or the registration rejected").await);
        };
        if let Some(entry) = &ledger_entry {
            insert_transaction(&mut *tx, entry).await?;
        }
        tx.commit().await?;

        Registration::try_from(row)
    }

    async fn complete_validation(&self, validation: RegistrationValidation) -> Result<Registration, RepositoryError> {
        let RegistrationValidation {
            registration,
            student,
            enrollment,
            schedule,
        } = validation;
        let mut tx = self.pool.begin().await?;

        insert_student(&mut *tx, &student).await?;
        insert_enrollment(&mut *tx, &enrollment).await?;
        insert_installments(&mut tx, &schedule).await?;

        let row = sqlx::query_as::<_, RegistrationRow>(
            r"
            UPDATE registrations
            SET status = $2,
                student_id = $3,
                validated_at = $4,
                validated_by = $5,
                updated_at = $6
            WHERE id = $1 AND status = $7
            RETURNING id, first_name, last_name, email, phone, course_id, session_id, status, notes,
                      registration_fee, registration_fee_paid, registration_fee_paid_at,
                      student_id, validated_at, validated_by, created_at, updated_at
            ",
        )
        .bind(registration.id().as_uuid())
        .bind(registration.status().code())
        .bind(registration.student_id().map(|id| *id.as_uuid()))
        .bind(registration.validated_at())
        .bind(registration.validated_by().map(|id| *id.as_uuid()))
        .bind(registration.updated_at())
        .bind(RegistrationStatus::PendingPayment.code())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(stale_write(&mut tx, registration.id(), "is no longer pending").await);
        };
        tx.commit().await?;

        tracing::debug!(registration_id = %registration.id(), "Registration validation stored");
        Registration::try_from(row)
    }
}
