//! PostgreSQL User Repository Implementation
//!
//! Implements the UserRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::UserRepository;
use crate::domain::models::ids::UserId;
use crate::domain::models::user::User;
use crate::infrastructure::driven_adapters::database::parse_code;
use crate::shared::errors::RepositoryError;

/// Database row representation for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User::restore(
            UserId::from_uuid(row.id),
            row.first_name,
            row.last_name,
            row.email,
            row.password_hash,
            parse_code("users.role", &row.role)?,
            row.is_active,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgresUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, first_name, last_name, email, password_hash, role,
                   is_active, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, first_name, last_name, email, password_hash, role,
                   is_active, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, first_name, last_name, email, password_hash, role,
                   is_active, created_at, updated_at
            FROM users
            ORDER BY last_name ASC, first_name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (
                id, first_name, last_name, email, password_hash, role,
                is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, first_name, last_name, email, password_hash, role,
                      is_active, created_at, updated_at
            ",
        )
        .bind(user.id().as_uuid())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.role().code())
        .bind(user.is_active())
        .bind(user.created_at())
        .bind(user.updated_at())
        .fetch_one(&self.pool)
        .await?;

        User::try_from(row)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            UPDATE users
            SET first_name = $2,
                last_name = $3,
                email = $4,
                password_hash = $5,
                role = $6,
                is_active = $7,
                updated_at = $8
            WHERE id = $1
            RETURNING id, first_name, last_name, email, password_hash, role,
                      is_active, created_at, updated_at
            ",
        )
        .bind(user.id().as_uuid())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.role().code())
        .bind(user.is_active())
        .bind(user.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
