//! Authentication Use Cases
//!
//! Token issuing stays in the REST adapter; these only deal with accounts.

mod ensure_admin;
mod get_current_user;
mod login;

use std::sync::Arc;

pub use ensure_admin::{AdminSeed, EnsureAdminUseCase};
pub use get_current_user::GetCurrentUserUseCase;
pub use login::LoginUseCase;

use crate::domain::gateways::{PasswordHasher, UserRepository};

pub struct AuthUseCases {
    pub login: LoginUseCase,
    pub current_user: GetCurrentUserUseCase,
    pub ensure_admin: EnsureAdminUseCase,
}

impl AuthUseCases {
    #[must_use]
    pub fn new(users: &Arc<dyn UserRepository>, hasher: &Arc<dyn PasswordHasher>) -> Self {
        Self {
            login: LoginUseCase::new(users.clone(), hasher.clone()),
            current_user: GetCurrentUserUseCase::new(users.clone()),
            ensure_admin: EnsureAdminUseCase::new(users.clone(), hasher.clone()),
        }
    }
}
