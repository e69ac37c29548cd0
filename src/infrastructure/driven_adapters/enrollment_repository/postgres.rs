//! PostgreSQL Enrollment Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::domain::gateways::{EnrollmentRepository, FeeSettlement};
use crate::domain::models::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::models::ids::{CourseId, EnrollmentId, PaymentPlanId, SessionId, StudentId};
use crate::domain::models::installment::Installment;
use crate::infrastructure::driven_adapters::database::parse_code;
use crate::infrastructure::driven_adapters::installment_repository::insert_installments;
use crate::infrastructure::driven_adapters::student_repository::settle_registration_fee;
use crate::infrastructure::driven_adapters::transaction_repository::insert_transaction;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: Uuid,
    student_id: Uuid,
    course_id: Uuid,
    session_id: Option<Uuid>,
    payment_plan_id: Option<Uuid>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EnrollmentRow> for Enrollment {
    type Error = RepositoryError;

    fn try_from(row: EnrollmentRow) -> Result<Self, Self::Error> {
        Ok(Enrollment::restore(
            EnrollmentId::from_uuid(row.id),
            StudentId::from_uuid(row.student_id),
            CourseId::from_uuid(row.course_id),
            row.session_id.map(SessionId::from_uuid),
            row.payment_plan_id.map(PaymentPlanId::from_uuid),
            row.start_date,
            row.end_date,
            parse_code("enrollments.status", &row.status)?,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// Insert one enrollment; shared with registration validation
pub(crate) async fn insert_enrollment<'e, E>(executor: E, enrollment: &Enrollment) -> Result<Enrollment, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, EnrollmentRow>(
        r"
        INSERT INTO enrollments (
            id, student_id, course_id, session_id, payment_plan_id, start_date, end_date,
            status, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, student_id, course_id, session_id, payment_plan_id, start_date, end_date,
                  status, created_at, updated_at
        ",
    )
    .bind(enrollment.id().as_uuid())
    .bind(enrollment.student_id().as_uuid())
    .bind(enrollment.course_id().as_uuid())
    .bind(enrollment.session_id().map(|id| *id.as_uuid()))
    .bind(enrollment.payment_plan_id().map(|id| *id.as_uuid()))
    .bind(enrollment.start_date())
    .bind(enrollment.end_date())
    .bind(enrollment.status().code())
    .bind(enrollment.created_at())
    .bind(enrollment.updated_at())
    .fetch_one(executor)
    .await?;

    Enrollment::try_from(row)
}

pub struct PostgresEnrollmentRepository {
    pool: PgPool,
}

impl PostgresEnrollmentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn find_by_id(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, RepositoryError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r"
            SELECT id, student_id, course_id, session_id, payment_plan_id, start_date, end_date,
                   status, created_at, updated_at
            FROM enrollments
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Enrollment::try_from).transpose()
    }

    async fn find_all(&self, student_id: Option<StudentId>) -> Result<Vec<Enrollment>, RepositoryError> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            r"
            SELECT id, student_id, course_id, session_id, payment_plan_id, start_date, end_date,
                   status, created_at, updated_at
            FROM enrollments
            WHERE $1::UUID IS NULL OR student_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(student_id.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Enrollment::try_from).collect()
    }

    async fn count_by_status(&self, status: EnrollmentStatus) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments WHERE status = $1")
            .bind(status.code())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(
        &self,
        enrollment: &Enrollment,
        schedule: Vec<Installment>,
        settlement: Option<FeeSettlement>,
    ) -> Result<Enrollment, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let created = insert_enrollment(&mut *tx, enrollment).await?;
        insert_installments(&mut tx, &schedule).await?;
        if let Some(settlement) = settlement {
            settle_registration_fee(&mut *tx, &settlement.student).await?;
            if let Some(entry) = &settlement.ledger_entry {
                insert_transaction(&mut *tx, entry).await?;
            }
        }
        tx.commit().await?;

        Ok(created)
    }

    async fn update(&self, enrollment: &Enrollment) -> Result<Option<Enrollment>, RepositoryError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r"
            UPDATE enrollments
            SET session_id = $2,
                payment_plan_id = $3,
                start_date = $4,
                end_date = $5,
                status = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING id, student_id, course_id, session_id, payment_plan_id, start_date, end_date,
                      status, created_at, updated_at
            ",
        )
        .bind(enrollment.id().as_uuid())
        .bind(enrollment.session_id().map(|id| *id.as_uuid()))
        .bind(enrollment.payment_plan_id().map(|id| *id.as_uuid()))
        .bind(enrollment.start_date())
        .bind(enrollment.end_date())
        .bind(enrollment.status().code())
        .bind(enrollment.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Enrollment::try_from).transpose()
    }

    async fn delete(&self, id: &EnrollmentId) -> Result<bool, RepositoryError> {
        // installments and payments cascade, ledger entries keep their row
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
