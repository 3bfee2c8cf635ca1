//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the QWI table contract.
/// These are independent of transport concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("API response has no header row")]
    EmptyTable,

    #[error("column not found in API header: {0}")]
    MissingColumn(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
