//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// PostgreSQL SQLSTATE for unique constraint violations
const PG_UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for foreign key violations
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Payment of {attempted} exceeds the remaining amount of {remaining}")]
    PaymentExceedsRemaining { attempted: Decimal, remaining: Decimal },
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate value: {0}")]
    UniqueViolation(String),

    #[error("Referenced by other records: {0}")]
    ForeignKeyViolation(String),

    #[error("Concurrent modification: {0}")]
    Conflict(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let message = db_err
                .constraint()
                .map_or_else(|| db_err.message().to_string(), ToString::to_string);
            match db_err.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) => return Self::UniqueViolation(message),
                Some(PG_FOREIGN_KEY_VIOLATION) => return Self::ForeignKeyViolation(message),
                _ => {}
            }
        }
        Self::Database(err)
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Shorthand for a `NotFound` error
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::Repository(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Conflict(_)
            | Self::Repository(
                RepositoryError::UniqueViolation(_)
                | RepositoryError::ForeignKeyViolation(_)
                | RepositoryError::Conflict(_),
            ) => {
                StatusCode::CONFLICT
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) | Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_)
            | Self::Domain(DomainError::Validation(_) | DomainError::PaymentExceedsRemaining { .. }) => {
                "VALIDATION_ERROR"
            }
            Self::Domain(DomainError::InvalidState(_)) => "INVALID_STATE",
            Self::NotFound { .. } | Self::Repository(RepositoryError::NotFound(_)) => "NOT_FOUND",
            Self::Conflict(_)
            | Self::Repository(
                RepositoryError::UniqueViolation(_)
                | RepositoryError::ForeignKeyViolation(_)
                | RepositoryError::Conflict(_),
            ) => {
                "CONFLICT"
            }
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Internal(_) | Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: ErrorDetail,
    pub timestamp: String,
}

impl ErrorResponse {
    /// Build an error envelope
    #[must_use]
    pub fn new(code: &str, message: String, details: Option<Vec<FieldError>>) -> Self {
        Self {
            success: false,
            message: message.clone(),
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&str> for FieldError {
    /// Splits `"field: message"` into its parts
    fn from(raw: &str) -> Self {
        match raw.split_once(": ") {
            Some((field, message)) => Self {
                field: field.to_string(),
                message: message.to_string(),
            },
            None => Self {
                field: String::new(),
                message: raw.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(errors.iter().map(|e| FieldError::from(e.as_str())).collect())
                } else {
                    None
                };
                let status = uc_error.status_code();
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %uc_error, "Request failed with internal error");
                    "An unexpected error occurred".to_string()
                } else {
                    uc_error.to_string()
                };
                (status, uc_error.error_code(), message, details)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone(), None),
            ApiError::InvalidUuid(msg) => (StatusCode::BAD_REQUEST, "INVALID_UUID", msg.clone(), None),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorResponse::new(code, message, details))).into_response()
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::InvalidUuid(err.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::UseCase(UseCaseError::Domain(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_conflicts_map_to_409() {
        let err = UseCaseError::Repository(RepositoryError::UniqueViolation("users_email_key".into()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "CONFLICT");

        let err = UseCaseError::Repository(RepositoryError::ForeignKeyViolation("fk".into()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err = UseCaseError::Repository(RepositoryError::Conflict("installment paid concurrently".into()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "CONFLICT");
    }

    #[test]
    fn domain_errors_map_to_400() {
        let err = UseCaseError::Domain(DomainError::InvalidState("already validated".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_STATE");

        let err = UseCaseError::Domain(DomainError::PaymentExceedsRemaining {
            attempted: Decimal::new(500, 0),
            remaining: Decimal::new(100, 0),
        });
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = UseCaseError::not_found("Student", "abc");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Student with id 'abc' not found");
    }

    #[test]
    fn field_error_splits_field_and_message() {
        let field = FieldError::from("amount: amount must be positive");
        assert_eq!(field.field, "amount");
        assert_eq!(field.message, "amount must be positive");

        let bare = FieldError::from("something went wrong");
        assert!(bare.field.is_empty());
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let response = ApiError::Internal(anyhow::anyhow!("pool exhausted")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["message"], "An unexpected error occurred");
    }
}
