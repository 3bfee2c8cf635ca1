//! Application-level errors (wraps domain and fetch errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::FetchError;

/// Application errors wrap the lower layers and add orchestration context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("no industry groups found in label data")]
    NoGroups,
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
