//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API. Bodies are camelCase JSON;
//! successful responses are wrapped in [`ApiResponse`].

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod finance;
pub mod payment_plan;
pub mod payment_schedule;
pub mod registration;
pub mod session;
pub mod student;
pub mod trainer;
pub mod transaction;
pub mod user;
mod validation;

use std::str::FromStr;

use axum::Json;
use serde::Serialize;

use crate::shared::errors::{ApiError, DomainError};

/// Success envelope: `{ "success": true, "message"?: ..., "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: None,
            data,
        })
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data,
        })
    }
}

/// Parse an optional query value given as code or label
///
/// # Errors
///
/// Returns a 400 validation error for unknown values.
pub fn parse_optional<T>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    value
        .filter(|v| !v.trim().is_empty())
        .map(T::from_str)
        .transpose()
        .map_err(ApiError::from)
}
