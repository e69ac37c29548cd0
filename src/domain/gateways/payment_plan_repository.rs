//! Payment Plan Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::PaymentPlanId;
use crate::domain::models::payment_plan::PaymentPlan;
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentPlanRepository: Send + Sync {
    async fn find_by_id(&self, id: &PaymentPlanId) -> Result<Option<PaymentPlan>, RepositoryError>;

    /// List plans sorted by name
    async fn find_all(&self) -> Result<Vec<PaymentPlan>, RepositoryError>;

    async fn create(&self, plan: &PaymentPlan) -> Result<PaymentPlan, RepositoryError>;

    async fn update(&self, plan: &PaymentPlan) -> Result<Option<PaymentPlan>, RepositoryError>;

    async fn delete(&self, id: &PaymentPlanId) -> Result<bool, RepositoryError>;
}
