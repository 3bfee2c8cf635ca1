//! Infrastructure-level errors (transport and decode failures)

use thiserror::Error;

/// Errors from the fetch boundary. These are per-group failures: a group
/// failing to fetch never aborts the whole assembly.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("empty response from {url}")]
    EmptyResponse { url: String },
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
