//! PostgreSQL Session Repository Implementation
//!
//! `enrolled_count` is not stored: it is the number of active enrollments
//! attached to the session, computed on every read.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::SessionRepository;
use crate::domain::models::ids::{CourseId, SessionId, TrainerId};
use crate::domain::models::session::{Session, SessionStatus};
use crate::infrastructure::driven_adapters::database::parse_code;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    course_id: Uuid,
    trainer_id: Option<Uuid>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    year: Option<i32>,
    month: Option<i32>,
    capacity: i32,
    enrolled_count: i32,
    location: String,
    price: Option<Decimal>,
    status: String,
    notes: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SessionRow> for Session {
    type Error = RepositoryError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let month = row
            .month
            .map(u32::try_from)
            .transpose()
            .map_err(|e| RepositoryError::Mapping(format!("sessions.month: {e}")))?;

        Ok(Session::restore(
            SessionId::from_uuid(row.id),
            CourseId::from_uuid(row.course_id),
            row.trainer_id.map(TrainerId::from_uuid),
            row.start_date,
            row.end_date,
            row.year,
            month,
            row.capacity,
            row.enrolled_count,
            row.location,
            row.price,
            parse_code("sessions.status", &row.status)?,
            row.notes,
            row.is_active,
            row.created_at,
            row.updated_at,
        ))
    }
}

fn month_column(session: &Session) -> Result<Option<i32>, RepositoryError> {
    session
        .month()
        .map(i32::try_from)
        .transpose()
        .map_err(|e| RepositoryError::Mapping(format!("sessions.month: {e}")))
}

pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, RepositoryError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r"
            SELECT s.id, s.course_id, s.trainer_id, s.start_date, s.end_date, s.year, s.month,
                   s.capacity,
                   (SELECT COUNT(*) FROM enrollments e
                    WHERE e.session_id = s.id AND e.status = 'ACTIVE')::INT AS enrolled_count,
                   s.location, s.price, s.status, s.notes, s.is_active, s.created_at, s.updated_at
            FROM sessions s
            WHERE s.id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Session::try_from).transpose()
    }

    async fn find_all(&self, course_id: Option<CourseId>) -> Result<Vec<Session>, RepositoryError> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r"
            SELECT s.id, s.course_id, s.trainer_id, s.start_date, s.end_date, s.year, s.month,
                   s.capacity,
                   (SELECT COUNT(*) FROM enrollments e
                    WHERE e.session_id = s.id AND e.status = 'ACTIVE')::INT AS enrolled_count,
                   s.location, s.price, s.status, s.notes, s.is_active, s.created_at, s.updated_at
            FROM sessions s
            WHERE $1::UUID IS NULL OR s.course_id = $1
            ORDER BY s.start_date ASC
            ",
        )
        .bind(course_id.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Session::try_from).collect()
    }

    async fn count_by_status(&self, status: SessionStatus) -> Result<i64, RepositoryError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions WHERE is_active AND status = $1")
                .bind(status.code())
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn create(&self, session: &Session) -> Result<Session, RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO sessions (
                id, course_id, trainer_id, start_date, end_date, year, month, capacity,
                location, price, status, notes, is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ",
        )
        .bind(session.id().as_uuid())
        .bind(session.course_id().as_uuid())
        .bind(session.trainer_id().map(|id| *id.as_uuid()))
        .bind(session.start_date())
        .bind(session.end_date())
        .bind(session.year())
        .bind(month_column(session)?)
        .bind(session.capacity())
        .bind(session.location())
        .bind(session.price())
        .bind(session.status().code())
        .bind(session.notes())
        .bind(session.is_active())
        .bind(session.created_at())
        .bind(session.updated_at())
        .execute(&self.pool)
        .await?;

        self.find_by_id(session.id())
            .await?
            .ok_or_else(|| RepositoryError::NotFound(session.id().to_string()))
    }

    async fn update(&self, session: &Session) -> Result<Option<Session>, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE sessions
            SET trainer_id = $2,
                start_date = $3,
                end_date = $4,
                year = $5,
                month = $6,
                capacity = $7,
                location = $8,
                price = $9,
                status = $10,
                notes = $11,
                is_active = $12,
                updated_at = $13
            WHERE id = $1
            ",
        )
        .bind(session.id().as_uuid())
        .bind(session.trainer_id().map(|id| *id.as_uuid()))
        .bind(session.start_date())
        .bind(session.end_date())
        .bind(session.year())
        .bind(month_column(session)?)
        .bind(session.capacity())
        .bind(session.location())
        .bind(session.price())
        .bind(session.status().code())
        .bind(session.notes())
        .bind(session.is_active())
        .bind(session.updated_at())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(session.id()).await
    }

    async fn delete(&self, id: &SessionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
