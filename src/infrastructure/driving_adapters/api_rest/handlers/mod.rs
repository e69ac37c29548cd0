//! HTTP Handlers
//!
//! One router per resource, nested under `/api` by [`super::router`].
//! Every route except `POST /auth/login` requires a bearer token.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod finance;
pub mod payment_plans;
pub mod payment_schedules;
pub mod registrations;
pub mod sessions;
pub mod students;
pub mod trainers;
pub mod transactions;
pub mod users;

use axum::http::StatusCode;
use axum::Json;

use super::dto::ApiResponse;
use crate::shared::errors::ApiError;

/// `200 OK` with an enveloped body
type JsonResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// `201 Created` with an enveloped body
type CreatedResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;
