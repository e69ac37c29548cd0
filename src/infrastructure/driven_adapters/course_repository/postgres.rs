//! PostgreSQL Course Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::course::Course;
use crate::domain::models::ids::{CourseId, TrainerId};
use crate::infrastructure::driven_adapters::database::parse_code;
use crate::shared::errors::RepositoryError;

/// Database row representation for courses table
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    trainer_id: Option<Uuid>,
    course_type: String,
    price_model: String,
    total_price: Decimal,
    price_per_month: Option<Decimal>,
    registration_fee: Decimal,
    duration_months: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CourseRow> for Course {
    type Error = RepositoryError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        Ok(Course::restore(
            CourseId::from_uuid(row.id),
            row.title,
            row.description,
            row.trainer_id.map(TrainerId::from_uuid),
            parse_code("courses.course_type", &row.course_type)?,
            parse_code("courses.price_model", &row.price_model)?,
            row.total_price,
            row.price_per_month,
            row.registration_fee,
            row.duration_months,
            row.is_active,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL implementation of CourseRepository
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r"
            SELECT id, title, description, trainer_id, course_type, price_model,
                   total_price, price_per_month, registration_fee, duration_months,
                   is_active, created_at, updated_at
            FROM courses
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Course::try_from).transpose()
    }

    async fn find_all(&self, active_only: bool) -> Result<Vec<Course>, RepositoryError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r"
            SELECT id, title, description, trainer_id, course_type, price_model,
                   total_price, price_per_month, registration_fee, duration_months,
                   is_active, created_at, updated_at
            FROM courses
            WHERE NOT $1 OR is_active
            ORDER BY title ASC
            ",
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn count_active(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses WHERE is_active")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(&self, course: &Course) -> Result<Course, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r"
            INSERT INTO courses (
                id, title, description, trainer_id, course_type, price_model,
                total_price, price_per_month, registration_fee, duration_months,
                is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, title, description, trainer_id, course_type, price_model,
                      total_price, price_per_month, registration_fee, duration_months,
                      is_active, created_at, updated_at
            ",
        )
        .bind(course.id().as_uuid())
        .bind(course.title())
        .bind(course.description())
        .bind(course.trainer_id().map(|id| *id.as_uuid()))
        .bind(course.course_type().code())
        .bind(course.price_model().code())
        .bind(course.total_price())
        .bind(course.price_per_month())
        .bind(course.registration_fee())
        .bind(course.duration_months())
        .bind(course.is_active())
        .bind(course.created_at())
        .bind(course.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Course::try_from(row)
    }

    async fn update(&self, course: &Course) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r"
            UPDATE courses
            SET title = $2,
                description = $3,
                trainer_id = $4,
                course_type = $5,
                price_model = $6,
                total_price = $7,
                price_per_month = $8,
                registration_fee = $9,
                duration_months = $10,
                is_active = $11,
                updated_at = $12
            WHERE id = $1
            RETURNING id, title, description, trainer_id, course_type, price_model,
                      total_price, price_per_month, registration_fee, duration_months,
                      is_active, created_at, updated_at
            ",
        )
        .bind(course.id().as_uuid())
        .bind(course.title())
        .bind(course.description())
        .bind(course.trainer_id().map(|id| *id.as_uuid()))
        .bind(course.course_type().code())
        .bind(course.price_model().code())
        .bind(course.total_price())
        .bind(course.price_per_month())
        .bind(course.registration_fee())
        .bind(course.duration_months())
        .bind(course.is_active())
        .bind(course.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Course::try_from).transpose()
    }

    async fn delete(&self, id: &CourseId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
