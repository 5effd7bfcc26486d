use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::domain::user::User;
use crate::repository::UserReader;
use crate::repository::errors::RepositoryResult;

/// Reads users from a JSON array on disk.
///
/// The file is re-read on every call so edits show up without a restart.
#[derive(Clone, Debug)]
pub struct JsonFileUserRepository {
    path: PathBuf,
}

impl JsonFileUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserReader for JsonFileUserRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        let file = File::open(&self.path)?;
        let users: Vec<User> = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("Loaded {} users from {}", users.len(), self.path.display());
        Ok(users)
    }
}
