//! DTOs exposed by the grid API endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the `/api/v1/users` service.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    /// Base64-encoded JSON query state emitted by the grid.
    pub query: Option<String>,
}

/// Body returned alongside a 4xx/5xx status.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
