//! Payment Plan Domain Model
//!
//! A reusable template: how many installments, and how many days apart.

use chrono::{DateTime, Utc};

use super::ids::PaymentPlanId;
use super::rules::{optional_text, required_text};
use crate::shared::errors::DomainError;

/// Data required to create a new PaymentPlan
#[derive(Debug, Clone)]
pub struct CreatePaymentPlanData {
    pub name: String,
    pub installments_count: i32,
    pub interval_days: i32,
    pub description: Option<String>,
}

/// Data for updating an existing PaymentPlan
#[derive(Debug, Clone, Default)]
pub struct UpdatePaymentPlanData {
    pub name: Option<String>,
    pub installments_count: Option<i32>,
    pub interval_days: Option<i32>,
    pub description: Option<String>,
}

/// PaymentPlan domain entity
#[derive(Debug, Clone)]
pub struct PaymentPlan {
    id: PaymentPlanId,
    name: String,
    installments_count: i32,
    interval_days: i32,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn at_least_one(field: &str, value: i32) -> Result<i32, DomainError> {
    if value < 1 {
        return Err(DomainError::Validation(format!("{field} must be at least 1")));
    }
    Ok(value)
}

impl PaymentPlan {
    /// Create a new PaymentPlan
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` on a blank name or a count/interval below one.
    pub fn new(data: CreatePaymentPlanData) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id: PaymentPlanId::new(),
            name: required_text("name", data.name)?,
            installments_count: at_least_one("installments_count", data.installments_count)?,
            interval_days: at_least_one("interval_days", data.interval_days)?,
            description: optional_text(data.description),
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a PaymentPlan from persisted data
    #[must_use]
    pub fn restore(
        id: PaymentPlanId,
        name: String,
        installments_count: i32,
        interval_days: i32,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            installments_count,
            interval_days,
            description,
            created_at,
            updated_at,
        }
    }

    /// Apply updates, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when an updated field breaks an invariant.
    pub fn with_updates(self, data: UpdatePaymentPlanData) -> Result<Self, DomainError> {
        Ok(Self {
            name: match data.name {
                Some(v) => required_text("name", v)?,
                None => self.name,
            },
            installments_count: match data.installments_count {
                Some(v) => at_least_one("installments_count", v)?,
                None => self.installments_count,
            },
            interval_days: match data.interval_days {
                Some(v) => at_least_one("interval_days", v)?,
                None => self.interval_days,
            },
            description: optional_text(data.description).or(self.description),
            updated_at: Utc::now(),
            ..self
        })
    }

    #[must_use]
    pub fn id(&self) -> &PaymentPlanId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn installments_count(&self) -> i32 {
        self.installments_count
    }

    #[must_use]
    pub fn interval_days(&self) -> i32 {
        self.interval_days
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_plan_requires_positive_count() {
        let result = PaymentPlan::new(CreatePaymentPlanData {
            name: "Trimestriel".into(),
            installments_count: 0,
            interval_days: 30,
            description: None,
        });
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
