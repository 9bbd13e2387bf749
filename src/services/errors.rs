use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors returned by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The search condition or page request cannot be executed as given.
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    /// A value failed its domain constraints.
    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
