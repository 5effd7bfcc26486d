use std::sync::Arc;

use crate::domain::user::User;
use crate::repository::UserReader;
use crate::repository::errors::RepositoryResult;

/// Serves a fixed user list held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

impl UserReader for InMemoryUserRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.as_ref().clone())
    }
}
