//! User Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::UserId;
use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// Repository trait for back-office user accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Find a user by its (lowercased) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// List every user, sorted by last name then first name
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Number of stored users
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Insert a new user
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;

    /// Update an existing user; `None` when it no longer exists
    async fn update(&self, user: &User) -> Result<Option<User>, RepositoryError>;

    /// Delete a user; `false` when nothing was deleted
    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError>;
}
