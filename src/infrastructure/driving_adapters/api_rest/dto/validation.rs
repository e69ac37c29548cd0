//! Shared field validators for request DTOs

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Digits with optional leading `+` and common separators
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 .\-]{5,19}$").expect("valid regex");
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

pub(super) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(error("phone", "Invalid phone number format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_formats() {
        assert!(validate_phone("+212 6 12 34 56 78").is_ok());
        assert!(validate_phone("0612345678").is_ok());
        assert!(validate_phone("06-12-34-56-78").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("12").is_err());
    }
}
