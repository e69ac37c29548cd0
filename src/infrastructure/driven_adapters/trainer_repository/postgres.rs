//! PostgreSQL Trainer Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::TrainerRepository;
use crate::domain::models::ids::TrainerId;
use crate::domain::models::trainer::Trainer;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct TrainerRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    email: Option<String>,
    specialty: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TrainerRow> for Trainer {
    fn from(row: TrainerRow) -> Self {
        Trainer::restore(
            TrainerId::from_uuid(row.id),
            row.first_name,
            row.last_name,
            row.phone,
            row.email,
            row.specialty,
            row.created_at,
            row.updated_at,
        )
    }
}

pub struct PostgresTrainerRepository {
    pool: PgPool,
}

impl PostgresTrainerRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainerRepository for PostgresTrainerRepository {
    async fn find_by_id(&self, id: &TrainerId) -> Result<Option<Trainer>, RepositoryError> {
        let row = sqlx::query_as::<_, TrainerRow>(
            r"
            SELECT id, first_name, last_name, phone, email, specialty, created_at, updated_at
            FROM trainers
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Trainer::from))
    }

    async fn find_all(&self) -> Result<Vec<Trainer>, RepositoryError> {
        let rows = sqlx::query_as::<_, TrainerRow>(
            r"
            SELECT id, first_name, last_name, phone, email, specialty, created_at, updated_at
            FROM trainers
            ORDER BY last_name ASC, first_name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Trainer::from).collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trainers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(&self, trainer: &Trainer) -> Result<Trainer, RepositoryError> {
        let row = sqlx::query_as::<_, TrainerRow>(
            r"
            INSERT INTO trainers (id, first_name, last_name, phone, email, specialty, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, first_name, last_name, phone, email, specialty, created_at, updated_at
            ",
        )
        .bind(trainer.id().as_uuid())
        .bind(trainer.first_name())
        .bind(trainer.last_name())
        .bind(trainer.phone())
        .bind(trainer.email())
        .bind(trainer.specialty())
        .bind(trainer.created_at())
        .bind(trainer.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(Trainer::from(row))
    }

    async fn update(&self, trainer: &Trainer) -> Result<Option<Trainer>, RepositoryError> {
        let row = sqlx::query_as::<_, TrainerRow>(
            r"
            UPDATE trainers
            SET first_name = $2,
                last_name = $3,
                phone = $4,
                email = $5,
                specialty = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING id, first_name, last_name, phone, email, specialty, created_at, updated_at
            ",
        )
        .bind(trainer.id().as_uuid())
        .bind(trainer.first_name())
        .bind(trainer.last_name())
        .bind(trainer.phone())
        .bind(trainer.email())
        .bind(trainer.specialty())
        .bind(trainer.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Trainer::from))
    }

    async fn delete(&self, id: &TrainerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
