//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::application::use_cases::users::{NewUser, UserChanges};
use crate::domain::models::user::{User, UserRole};

/// DTO for creating a back-office user
#[derive(Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "password must be between 8 and 128 characters"))]
    pub password: String,

    /// Defaults to `STAFF`
    #[zeroize(skip)]
    pub role: Option<UserRole>,
}

impl From<&CreateUserDto> for NewUser {
    fn from(dto: &CreateUserDto) -> Self {
        Self {
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            email: dto.email.clone(),
            password: dto.password.clone(),
            role: dto.role.unwrap_or(UserRole::Staff),
        }
    }
}

/// DTO for updating a user; absent fields are left unchanged
#[derive(Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128, message = "password must be between 8 and 128 characters"))]
    pub password: Option<String>,

    #[zeroize(skip)]
    pub role: Option<UserRole>,

    pub is_active: Option<bool>,
}

impl From<&UpdateUserDto> for UserChanges {
    fn from(dto: &UpdateUserDto) -> Self {
        Self {
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            email: dto.email.clone(),
            password: dto.password.clone(),
            role: dto.role,
            is_active: dto.is_active,
        }
    }
}

/// User as returned by the API; the password hash never leaves the server
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub role_label: &'static str,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            role: user.role(),
            role_label: user.role().label(),
            is_active: user.is_active(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}
