//! Error types surfaced by the runtime API.

use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("actor {0:?} not found")]
    ActorNotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(String),
}
