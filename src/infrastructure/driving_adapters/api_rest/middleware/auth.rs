//! JWT Authentication
//!
//! Extracts and validates bearer tokens, and guards routes by role.

use std::str::FromStr;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::domain::models::ids::UserId;
use crate::domain::models::user::UserRole;
use crate::infrastructure::driven_adapters::token::{verify_token, Claims};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Roles allowed to read finance reports
pub const FINANCE_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Staff];

/// Authenticated user extracted from a verified JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
}

impl AuthUser {
    /// Reject users whose role is not in `roles`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` when the role is not allowed.
    pub fn require_roles(&self, roles: &[UserRole]) -> Result<(), ApiError> {
        if roles.contains(&self.role) {
            Ok(())
        } else {
            tracing::warn!(user_id = %self.id, role = %self.role, "Access denied");
            Err(ApiError::Forbidden("Access denied".to_string()))
        }
    }

    /// Reject anyone but administrators
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` for non-admin users.
    pub fn require_admin(&self) -> Result<(), ApiError> {
        self.require_roles(&[UserRole::Admin])
    }
}

impl TryFrom<Claims> for AuthUser {
    type Error = ApiError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let invalid = || ApiError::Unauthorized("Invalid or expired token".to_string());
        Ok(Self {
            id: UserId::try_from(claims.sub.as_str()).map_err(|_| invalid())?,
            role: UserRole::from_str(&claims.role).map_err(|_| invalid())?,
            email: claims.email,
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header format".to_string()))?;

        // Token validation details stay out of the response
        let claims = verify_token(&state.config.jwt, token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            ApiError::Unauthorized("Invalid or expired token".to_string())
        })?;

        Self::try_from(claims)
    }
}
