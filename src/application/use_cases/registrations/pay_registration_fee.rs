//! Pay Registration Fee Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use super::get_registration_by_id::load;
use crate::domain::gateways::{Clock, RegistrationRepository};
use crate::domain::models::ids::{RegistrationId, UserId};
use crate::domain::models::registration::Registration;
use crate::domain::models::transaction::Transaction;
use crate::shared::errors::UseCaseError;

/// Marks a registration fee as collected and books it in the ledger
pub struct PayRegistrationFeeUseCase {
    registration_repository: Arc<dyn RegistrationRepository>,
    clock: Arc<dyn Clock>,
}

impl PayRegistrationFeeUseCase {
    #[must_use]
    pub fn new(registration_repository: Arc<dyn RegistrationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registration_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// A zero fee is marked paid without a ledger entry.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the registration doesn't exist.
    /// Returns `UseCaseError::Domain` if the fee is already paid or the registration was rejected.
    /// Returns a repository conflict if another request collected the fee first.
    pub async fn execute(&self, id: &RegistrationId, collected_by: Option<UserId>) -> Result<Registration, UseCaseError> {
        tracing::info!(registration_id = %id, "Collecting registration fee");

        let paid = load(self.registration_repository.as_ref(), id)
            .await?
            .pay_fee(self.clock.now())?;

        let entry = if paid.registration_fee() > Decimal::ZERO {
            Some(Transaction::registration_fee_income(
                paid.registration_fee(),
                format!("Frais d'inscription - {} {}", paid.first_name(), paid.last_name()),
                self.clock.today(),
                paid.student_id().copied(),
                collected_by,
            )?)
        } else {
            None
        };
        let saved = self.registration_repository.record_fee_payment(&paid, entry).await?;

        tracing::info!(registration_id = %id, amount = %saved.registration_fee(), "Registration fee collected");
        Ok(saved)
    }
}
