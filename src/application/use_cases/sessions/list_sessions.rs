//! List Sessions Use Case

use std::sync::Arc;

use crate::domain::gateways::SessionRepository;
use crate::domain::models::ids::CourseId;
use crate::domain::models::session::Session;
use crate::shared::errors::UseCaseError;

pub struct ListSessionsUseCase {
    session_repository: Arc<dyn SessionRepository>,
}

impl ListSessionsUseCase {
    #[must_use]
    pub fn new(session_repository: Arc<dyn SessionRepository>) -> Self {
        Self { session_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, course_id: Option<CourseId>) -> Result<Vec<Session>, UseCaseError> {
        tracing::debug!(course_id = ?course_id, "Listing sessions");
        Ok(self.session_repository.find_all(course_id).await?)
    }
}
