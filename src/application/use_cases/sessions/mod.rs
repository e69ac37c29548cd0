//! Session Use Cases

mod create_session;
mod delete_session;
mod get_session_by_id;
mod list_sessions;
mod update_session;

use std::sync::Arc;

pub use create_session::CreateSessionUseCase;
pub use delete_session::DeleteSessionUseCase;
pub use get_session_by_id::GetSessionByIdUseCase;
pub use list_sessions::ListSessionsUseCase;
pub use update_session::UpdateSessionUseCase;

use crate::domain::gateways::{CourseRepository, SessionRepository, TrainerRepository};

pub struct SessionUseCases {
    pub create: CreateSessionUseCase,
    pub list: ListSessionsUseCase,
    pub get: GetSessionByIdUseCase,
    pub update: UpdateSessionUseCase,
    pub delete: DeleteSessionUseCase,
}

impl SessionUseCases {
    #[must_use]
    pub fn new(
        sessions: &Arc<dyn SessionRepository>,
        courses: &Arc<dyn CourseRepository>,
        trainers: &Arc<dyn TrainerRepository>,
    ) -> Self {
        Self {
            create: CreateSessionUseCase::new(sessions.clone(), courses.clone(), trainers.clone()),
            list: ListSessionsUseCase::new(sessions.clone()),
            get: GetSessionByIdUseCase::new(sessions.clone()),
            update: UpdateSessionUseCase::new(sessions.clone(), trainers.clone()),
            delete: DeleteSessionUseCase::new(sessions.clone()),
        }
    }
}
