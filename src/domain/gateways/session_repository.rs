//! Session Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::{CourseId, SessionId};
use crate::domain::models::session::{Session, SessionStatus};
use crate::shared::errors::RepositoryError;

/// Repository trait for course sessions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, RepositoryError>;

    /// List sessions by start date, optionally for a single course
    async fn find_all(&self, course_id: Option<CourseId>) -> Result<Vec<Session>, RepositoryError>;

    /// Number of active sessions in the given status
    async fn count_by_status(&self, status: SessionStatus) -> Result<i64, RepositoryError>;

    async fn create(&self, session: &Session) -> Result<Session, RepositoryError>;

    async fn update(&self, session: &Session) -> Result<Option<Session>, RepositoryError>;

    async fn delete(&self, id: &SessionId) -> Result<bool, RepositoryError>;
}
