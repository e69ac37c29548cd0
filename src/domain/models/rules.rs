//! Field Rules
//!
//! Small invariant checks shared by the entity constructors.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::shared::errors::DomainError;

/// Round a money amount to cents, half away from zero
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Trim a required text field, rejecting blank values
pub fn required_text(field: &str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field, turning blank values into `None`
#[must_use]
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Require a money amount that stays strictly positive once rounded to cents
pub fn positive_amount(field: &str, value: Decimal) -> Result<Decimal, DomainError> {
    let rounded = round_money(value);
    if rounded <= Decimal::ZERO {
        return Err(DomainError::Validation(format!("{field} must be at least 0.01")));
    }
    Ok(rounded)
}

/// Require a money amount of zero or more
pub fn non_negative_amount(field: &str, value: Decimal) -> Result<Decimal, DomainError> {
    if value < Decimal::ZERO {
        return Err(DomainError::Validation(format!("{field} must not be negative")));
    }
    Ok(round_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("name", "  Amel ".into()).unwrap(), "Amel");
        assert!(required_text("name", "   ".into()).is_err());
    }

    #[test]
    fn test_optional_text_drops_blank() {
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some(" x ".into())), Some("x".into()));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn test_amount_rules() {
        assert_eq!(positive_amount("amount", dec!(10.005)).unwrap(), dec!(10.01));
        assert!(positive_amount("amount", Decimal::ZERO).is_err());
        assert!(non_negative_amount("fee", Decimal::ZERO).is_ok());
        assert!(non_negative_amount("fee", dec!(-1)).is_err());
    }

    #[test]
    fn test_sub_cent_amounts_are_checked_after_rounding() {
        assert!(positive_amount("amount", dec!(0.004)).is_err());
        assert_eq!(positive_amount("amount", dec!(0.005)).unwrap(), dec!(0.01));
        assert!(non_negative_amount("fee", dec!(-0.004)).is_err());
        assert_eq!(non_negative_amount("fee", dec!(0.004)).unwrap(), Decimal::ZERO);
    }
}
