use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Data source not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RepositoryError::NotFound(err.to_string()),
            _ => RepositoryError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => RepositoryError::Io(err.to_string()),
            _ => RepositoryError::Parse(err.to_string()),
        }
    }
}
