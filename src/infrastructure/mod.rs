//! Infrastructure layer: fetch boundary and HTTP client
//!
//! This layer implements the I/O boundary traits the assembler depends on.

pub mod census;
pub mod error;
pub mod traits;

pub use census::{CensusClient, DEFAULT_ENDPOINT};
pub use error::{FetchError, FetchResult};
pub use traits::{IndicatorFetcher, QwiQuery, StaticFetcher};
