//! User Use Cases

mod create_user;
mod delete_user;
mod get_user_by_id;
mod list_users;
mod update_user;

use std::sync::Arc;

pub use create_user::{CreateUserUseCase, NewUser};
pub use delete_user::DeleteUserUseCase;
pub use get_user_by_id::GetUserByIdUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user::{UpdateUserUseCase, UserChanges};

use crate::domain::gateways::{PasswordHasher, UserRepository};

pub struct UserUseCases {
    pub create: CreateUserUseCase,
    pub list: ListUsersUseCase,
    pub get: GetUserByIdUseCase,
    pub update: UpdateUserUseCase,
    pub delete: DeleteUserUseCase,
}

impl UserUseCases {
    #[must_use]
    pub fn new(users: &Arc<dyn UserRepository>, hasher: &Arc<dyn PasswordHasher>) -> Self {
        Self {
            create: CreateUserUseCase::new(users.clone(), hasher.clone()),
            list: ListUsersUseCase::new(users.clone()),
            get: GetUserByIdUseCase::new(users.clone()),
            update: UpdateUserUseCase::new(users.clone(), hasher.clone()),
            delete: DeleteUserUseCase::new(users.clone()),
        }
    }
}
