//! Registration Use Cases

mod create_registration;
mod delete_registration;
mod get_registration_by_id;
mod list_registrations;
mod pay_registration_fee;
mod reject_registration;
mod update_registration;
mod validate_registration;

use std::sync::Arc;

pub use create_registration::{CreateRegistrationUseCase, NewRegistration};
pub use delete_registration::DeleteRegistrationUseCase;
pub use get_registration_by_id::GetRegistrationByIdUseCase;
pub use list_registrations::ListRegistrationsUseCase;
pub use pay_registration_fee::PayRegistrationFeeUseCase;
pub use reject_registration::RejectRegistrationUseCase;
pub use update_registration::UpdateRegistrationUseCase;
pub use validate_registration::{ValidateRegistrationUseCase, ValidatedRegistration};

use crate::domain::gateways::{
    Clock, CourseRepository, PaymentPlanRepository, RegistrationRepository, SessionRepository,
};

pub struct RegistrationUseCases {
    pub create: CreateRegistrationUseCase,
    pub list: ListRegistrationsUseCase,
    pub get: GetRegistrationByIdUseCase,
    pub update: UpdateRegistrationUseCase,
    pub delete: DeleteRegistrationUseCase,
    pub pay_fee: PayRegistrationFeeUseCase,
    pub validate: ValidateRegistrationUseCase,
    pub reject: RejectRegistrationUseCase,
}

/// Repositories the registration workflow touches
pub struct RegistrationDeps {
    pub registrations: Arc<dyn RegistrationRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub payment_plans: Arc<dyn PaymentPlanRepository>,
    pub clock: Arc<dyn Clock>,
}

impl RegistrationUseCases {
    #[must_use]
    pub fn new(deps: &RegistrationDeps) -> Self {
        Self {
            create: CreateRegistrationUseCase::new(
                deps.registrations.clone(),
                deps.courses.clone(),
                deps.sessions.clone(),
            ),
            list: ListRegistrationsUseCase::new(deps.registrations.clone()),
            get: GetRegistrationByIdUseCase::new(deps.registrations.clone()),
            update: UpdateRegistrationUseCase::new(
                deps.registrations.clone(),
                deps.courses.clone(),
                deps.sessions.clone(),
            ),
            delete: DeleteRegistrationUseCase::new(deps.registrations.clone()),
            pay_fee: PayRegistrationFeeUseCase::new(deps.registrations.clone(), deps.clock.clone()),
            validate: ValidateRegistrationUseCase::new(
                deps.registrations.clone(),
                deps.courses.clone(),
                deps.sessions.clone(),
                deps.payment_plans.clone(),
                deps.clock.clone(),
            ),
            reject: RejectRegistrationUseCase::new(deps.registrations.clone()),
        }
    }
}
