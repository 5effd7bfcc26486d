//! Service layer sitting between the HTTP routes and the record sources.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The query token could not be decoded into a usable state.
    #[error("malformed query state: {0}")]
    MalformedQueryState(String),

    /// Page number or page size is not positive.
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Whether the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::MalformedQueryState(_) | ServiceError::InvalidPagination(_)
        )
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
