//! Authentication DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::user::UserResponseDto;

/// Login request; credentials are wiped from memory on drop
#[derive(Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct LoginDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: UserResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_email_and_password() {
        let dto: LoginDto = serde_json::from_value(serde_json::json!({
            "email": "admin@school.local",
            "password": ""
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
