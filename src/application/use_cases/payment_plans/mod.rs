//! Payment Plan Use Cases

mod create_payment_plan;
mod delete_payment_plan;
mod get_payment_plan_by_id;
mod list_payment_plans;
mod update_payment_plan;

use std::sync::Arc;

pub use create_payment_plan::CreatePaymentPlanUseCase;
pub use delete_payment_plan::DeletePaymentPlanUseCase;
pub use get_payment_plan_by_id::GetPaymentPlanByIdUseCase;
pub use list_payment_plans::ListPaymentPlansUseCase;
pub use update_payment_plan::UpdatePaymentPlanUseCase;

use crate::domain::gateways::PaymentPlanRepository;

pub struct PaymentPlanUseCases {
    pub create: CreatePaymentPlanUseCase,
    pub list: ListPaymentPlansUseCase,
    pub get: GetPaymentPlanByIdUseCase,
    pub update: UpdatePaymentPlanUseCase,
    pub delete: DeletePaymentPlanUseCase,
}

impl PaymentPlanUseCases {
    #[must_use]
    pub fn new(plans: &Arc<dyn PaymentPlanRepository>) -> Self {
        Self {
            create: CreatePaymentPlanUseCase::new(plans.clone()),
            list: ListPaymentPlansUseCase::new(plans.clone()),
            get: GetPaymentPlanByIdUseCase::new(plans.clone()),
            update: UpdatePaymentPlanUseCase::new(plans.clone()),
            delete: DeletePaymentPlanUseCase::new(plans.clone()),
        }
    }
}
