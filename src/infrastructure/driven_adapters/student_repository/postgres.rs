//! PostgreSQL Student Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::domain::gateways::StudentRepository;
use crate::domain::models::ids::StudentId;
use crate::domain::models::student::Student;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    birth_date: Option<NaiveDate>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    is_registration_fee_paid: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::restore(
            StudentId::from_uuid(row.id),
            row.first_name,
            row.last_name,
            row.birth_date,
            row.phone,
            row.email,
            row.address,
            row.is_registration_fee_paid,
            row.created_at,
            row.updated_at,
        )
    }
}

/// Insert one student; shared with registration validation
pub(crate) async fn insert_student<'e, E>(executor: E, student: &Student) -> Result<Student, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, StudentRow>(
        r"
        INSERT INTO students (
            id, first_name, last_name, birth_date, phone, email, address,
            is_registration_fee_paid, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, first_name, last_name, birth_date, phone, email, address,
                  is_registration_fee_paid, created_at, updated_at
        ",
    )
    .bind(student.id().as_uuid())
    .bind(student.first_name())
    .bind(student.last_name())
    .bind(student.birth_date())
    .bind(student.phone())
    .bind(student.email())
    .bind(student.address())
    .bind(student.is_registration_fee_paid())
    .bind(student.created_at())
    .bind(student.updated_at())
    .fetch_one(executor)
    .await?;

    Ok(Student::from(row))
}

/// Flip the registration fee flag of a student who has not paid it yet
///
/// Returns `RepositoryError::Conflict` when the fee was settled meanwhile.
pub(crate) async fn settle_registration_fee<'e, E>(
    executor: E,
    student: &Student,
) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        r"
        UPDATE students
        SET is_registration_fee_paid = TRUE, updated_at = $2
        WHERE id = $1 AND is_registration_fee_paid = FALSE
        ",
    )
    .bind(student.id().as_uuid())
    .bind(student.updated_at())
    .execute(executor)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::Conflict(format!(
            "registration fee of student {} already settled",
            student.id()
        )));
    }
    Ok(())
}

/// PostgreSQL implementation of StudentRepository
pub struct PostgresStudentRepository {
    pool: PgPool,
}

impl PostgresStudentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, RepositoryError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r"
            SELECT id, first_name, last_name, birth_date, phone, email, address,
                   is_registration_fee_paid, created_at, updated_at
            FROM students
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Student::from))
    }

    async fn find_all(&self, search: Option<String>) -> Result<Vec<Student>, RepositoryError> {
        let pattern = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{s}%"));

        let rows = sqlx::query_as::<_, StudentRow>(
            r"
            SELECT id, first_name, last_name, birth_date, phone, email, address,
                   is_registration_fee_paid, created_at, updated_at
            FROM students
            WHERE $1::TEXT IS NULL
               OR first_name ILIKE $1
               OR last_name ILIKE $1
            ORDER BY last_name ASC, first_name ASC
            ",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(&self, student: &Student) -> Result<Student, RepositoryError> {
        insert_student(&self.pool, student).await
    }

    async fn update(&self, student: &Student) -> Result<Option<Student>, RepositoryError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r"
            UPDATE students
            SET first_name = $2,
                last_name = $3,
                birth_date = $4,
                phone = $5,
                email = $6,
                address = $7,
                is_registration_fee_paid = $8,
                updated_at = $9
            WHERE id = $1
            RETURNING id, first_name, last_name, birth_date, phone, email, address,
                      is_registration_fee_paid, created_at, updated_at
            ",
        )
        .bind(student.id().as_uuid())
        .bind(student.first_name())
        .bind(student.last_name())
        .bind(student.birth_date())
        .bind(student.phone())
        .bind(student.email())
        .bind(student.address())
        .bind(student.is_registration_fee_paid())
        .bind(student.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Student::from))
    }

    async fn delete(&self, id: &StudentId) -> Result<bool, RepositoryError> {
        // enrollments, installments and payments cascade
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
