//! Spreading one enrollment-level payment across its installments.

use rust_decimal::Decimal;

use crate::domain::models::ids::InstallmentId;
use crate::domain::models::installment::Installment;
use crate::domain::models::rules::positive_amount;
use crate::shared::errors::DomainError;

/// Share of a payment assigned to one installment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub installment_id: InstallmentId,
    pub amount: Decimal,
}

/// Result of [`allocate_payment`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    pub allocations: Vec<Allocation>,
    /// Part of the payment left once every installment is settled
    pub remaining_credit: Decimal,
}

/// Allocate `amount` oldest-first over the unpaid installments
///
/// Installments are filled in due-date order, installment number breaking
/// ties. Cancelled and settled installments are skipped. The last
/// installment touched may end partially paid.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a non-positive amount and
/// `DomainError::InvalidState` when nothing is left to pay.
pub fn allocate_payment(installments: &[Installment], amount: Decimal) -> Result<AllocationPlan, DomainError> {
    let amount = positive_amount("amount", amount)?;

    let mut open: Vec<&Installment> = installments.iter().filter(|i| i.accepts_payment()).collect();
    if open.is_empty() {
        return Err(DomainError::InvalidState(
            "no unpaid installment left on this enrollment".to_string(),
        ));
    }
    open.sort_by_key(|i| (i.due_date(), i.installment_number()));

    let mut left = amount;
    let mut allocations = Vec::new();
    for installment in open {
        if left <= Decimal::ZERO {
            break;
        }
        let share = left.min(installment.remaining_amount());
        allocations.push(Allocation {
            installment_id: *installment.id(),
            amount: share,
        });
        left -= share;
    }

    Ok(AllocationPlan {
        allocations,
        remaining_credit: left,
    })
}
