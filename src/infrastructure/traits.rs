//! I/O boundary traits for testability
//!
//! The assembler depends on this trait, never on the HTTP client, so tests
//! drive the full pipeline with canned tables.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::infrastructure::error::{FetchError, FetchResult};

/// Geographic/time/indicator selector for a QWI request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QwiQuery {
    /// Indicator name, e.g. "Emp", "EarnS", "FrmJbGn", "FrmJbLs"
    pub indicator: String,
    /// FIPS state code, e.g. "02"
    pub state: String,
    pub year: String,
    pub quarter: String,
}

/// Fetch abstraction for one top-level group's indicator table.
///
/// The returned table is header row first, data rows after, exactly as the
/// Census timeseries endpoint serves it. Transport is an implementation
/// detail (HTTP, cached file, in-memory mock).
pub trait IndicatorFetcher: Send + Sync {
    fn fetch_group(&self, query: &QwiQuery, codes: &[String]) -> FetchResult<Vec<Vec<Value>>>;
}

/// In-memory fetcher keyed by a group's lead code. Used by tests and kept
/// here beside the trait like the other boundary implementations.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    tables: BTreeMap<String, Vec<Vec<Value>>>,
}

impl StaticFetcher {
    pub fn with_table(mut self, lead_code: &str, table: Vec<Vec<Value>>) -> Self {
        self.tables.insert(lead_code.to_string(), table);
        self
    }
}

impl IndicatorFetcher for StaticFetcher {
    fn fetch_group(&self, _query: &QwiQuery, codes: &[String]) -> FetchResult<Vec<Vec<Value>>> {
        let lead = codes.first().cloned().unwrap_or_default();
        self.tables
            .get(&lead)
            .cloned()
            .ok_or(FetchError::EmptyResponse {
                url: format!("static://{lead}"),
            })
    }
}
