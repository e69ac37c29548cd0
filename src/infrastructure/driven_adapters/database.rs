//! Database Connection Management
//!
//! Utilities for creating and managing database connections.

use std::str::FromStr;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;
use crate::shared::errors::{DomainError, RepositoryError};

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns the `sqlx::Error` raised while connecting.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Parse a status code stored in a `TEXT` column
pub(crate) fn parse_code<T>(column: &str, value: &str) -> Result<T, RepositoryError>
where
    T: FromStr<Err = DomainError>,
{
    T::from_str(value).map_err(|e| RepositoryError::Mapping(format!("{column}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::installment::InstallmentStatus;

    #[test]
    fn test_parse_code() {
        let status: InstallmentStatus = parse_code("status", "PARTIAL").unwrap();
        assert_eq!(status, InstallmentStatus::Partial);

        let err = parse_code::<InstallmentStatus>("status", "LOST").unwrap_err();
        assert!(matches!(err, RepositoryError::Mapping(msg) if msg.starts_with("status:")));
    }
}
