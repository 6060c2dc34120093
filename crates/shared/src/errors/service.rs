use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),

    #[error("Insufficient stock")]
    InsufficientStock,

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),
}

impl ServiceError {
    /// Maps a repository failure to a service error with an entity-specific
    /// not-found message.
    pub fn from_repo(err: RepositoryError, entity: &str) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(format!("{entity} not found")),
            RepositoryError::InsufficientStock { .. } => ServiceError::InsufficientStock,
        }
    }
}
