//! PostgreSQL Payment Plan Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::PaymentPlanRepository;
use crate::domain::models::ids::PaymentPlanId;
use crate::domain::models::payment_plan::PaymentPlan;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct PaymentPlanRow {
    id: Uuid,
    name: String,
    installments_count: i32,
    interval_days: i32,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PaymentPlanRow> for PaymentPlan {
    fn from(row: PaymentPlanRow) -> Self {
        PaymentPlan::restore(
            PaymentPlanId::from_uuid(row.id),
            row.name,
            row.installments_count,
            row.interval_days,
            row.description,
            row.created_at,
            row.updated_at,
        )
    }
}

pub struct PostgresPaymentPlanRepository {
    pool: PgPool,
}

impl PostgresPaymentPlanRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentPlanRepository for PostgresPaymentPlanRepository {
    async fn find_by_id(&self, id: &PaymentPlanId) -> Result<Option<PaymentPlan>, RepositoryError> {
        let row = sqlx::query_as::<_, PaymentPlanRow>(
            r"
            SELECT id, name, installments_count, interval_days, description, created_at, updated_at
            FROM payment_plans
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PaymentPlan::from))
    }

    async fn find_all(&self) -> Result<Vec<PaymentPlan>, RepositoryError> {
        let rows = sqlx::query_as::<_, PaymentPlanRow>(
            r"
            SELECT id, name, installments_count, interval_days, description, created_at, updated_at
            FROM payment_plans
            ORDER BY name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PaymentPlan::from).collect())
    }

    async fn create(&self, plan: &PaymentPlan) -> Result<PaymentPlan, RepositoryError> {
        let row = sqlx::query_as::<_, PaymentPlanRow>(
            r"
            INSERT INTO payment_plans (id, name, installments_count, interval_days, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, installments_count, interval_days, description, created_at, updated_at
            ",
        )
        .bind(plan.id().as_uuid())
        .bind(plan.name())
        .bind(plan.installments_count())
        .bind(plan.interval_days())
        .bind(plan.description())
        .bind(plan.created_at())
        .bind(plan.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(PaymentPlan::from(row))
    }

    async fn update(&self, plan: &PaymentPlan) -> Result<Option<PaymentPlan>, RepositoryError> {
        let row = sqlx::query_as::<_, PaymentPlanRow>(
            r"
            UPDATE payment_plans
            SET name = $2,
                installments_count = $3,
                interval_days = $4,
                description = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING id, name, installments_count, interval_days, description, created_at, updated_at
            ",
        )
        .bind(plan.id().as_uuid())
        .bind(plan.name())
        .bind(plan.installments_count())
        .bind(plan.interval_days())
        .bind(plan.description())
        .bind(plan.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PaymentPlan::from))
    }

    async fn delete(&self, id: &PaymentPlanId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM payment_plans WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
