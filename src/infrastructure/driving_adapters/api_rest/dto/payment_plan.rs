//! Payment Plan DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::payment_plan::{CreatePaymentPlanData, PaymentPlan, UpdatePaymentPlanData};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentPlanDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(range(min = 1, max = 36, message = "installments_count must be between 1 and 36"))]
    pub installments_count: i32,

    #[validate(range(min = 1, max = 365, message = "interval_days must be between 1 and 365"))]
    pub interval_days: i32,

    pub description: Option<String>,
}

impl From<CreatePaymentPlanDto> for CreatePaymentPlanData {
    fn from(dto: CreatePaymentPlanDto) -> Self {
        Self {
            name: dto.name,
            installments_count: dto.installments_count,
            interval_days: dto.interval_days,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentPlanDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 36, message = "installments_count must be between 1 and 36"))]
    pub installments_count: Option<i32>,

    #[validate(range(min = 1, max = 365, message = "interval_days must be between 1 and 365"))]
    pub interval_days: Option<i32>,

    pub description: Option<String>,
}

impl From<UpdatePaymentPlanDto> for UpdatePaymentPlanData {
    fn from(dto: UpdatePaymentPlanDto) -> Self {
        Self {
            name: dto.name,
            installments_count: dto.installments_count,
            interval_days: dto.interval_days,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanResponseDto {
    pub id: Uuid,
    pub name: String,
    pub installments_count: i32,
    pub interval_days: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PaymentPlan> for PaymentPlanResponseDto {
    fn from(plan: PaymentPlan) -> Self {
        Self {
            id: *plan.id().as_uuid(),
            name: plan.name().to_string(),
            installments_count: plan.installments_count(),
            interval_days: plan.interval_days(),
            description: plan.description().map(ToString::to_string),
            created_at: plan.created_at(),
            updated_at: plan.updated_at(),
        }
    }
}
