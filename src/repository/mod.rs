//! Record sources feeding the query pipeline.

use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod json;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use json::JsonFileUserRepository;
pub use memory::InMemoryUserRepository;

/// Supplies the full, unfiltered user list.
///
/// Every call returns a fresh snapshot; callers are free to consume it.
pub trait UserReader {
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}
