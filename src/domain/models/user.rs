//! User Domain Model
//!
//! Back-office accounts. Passwords only ever reach this type already hashed.

use chrono::{DateTime, Utc};

use super::ids::UserId;
use super::labels::labeled_enum;
use super::rules::required_text;
use crate::shared::errors::DomainError;

labeled_enum!(
    /// Access level of a back-office user
    UserRole {
        Admin => ("ADMIN", "Administrateur"),
        Staff => ("STAFF", "Personnel"),
        Trainer => ("TRAINER", "Formateur"),
    }
);

/// Data required to create a new User
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Data for updating an existing User
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: UserRole,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn normalize_email(email: String) -> Result<String, DomainError> {
    Ok(required_text("email", email)?.to_lowercase())
}

impl User {
    /// Create a new active User
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a required field is blank.
    pub fn new(data: CreateUserData) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            first_name: required_text("first_name", data.first_name)?,
            last_name: required_text("last_name", data.last_name)?,
            email: normalize_email(data.email)?,
            password_hash: required_text("password", data.password_hash)?,
            role: data.role,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a User from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: UserId,
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        role: UserRole,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            password_hash,
            role,
            is_active,
            created_at,
            updated_at,
        }
    }

    /// Apply updates, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when an updated field is blank.
    pub fn with_updates(self, data: UpdateUserData) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: match data.first_name {
                Some(v) => required_text("first_name", v)?,
                None => self.first_name,
            },
            last_name: match data.last_name {
                Some(v) => required_text("last_name", v)?,
                None => self.last_name,
            },
            email: match data.email {
                Some(v) => normalize_email(v)?,
                None => self.email,
            },
            password_hash: data.password_hash.unwrap_or(self.password_hash),
            role: data.role.unwrap_or(self.role),
            is_active: data.is_active.unwrap_or(self.is_active),
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Whether the user holds one of the given roles
    #[must_use]
    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
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
