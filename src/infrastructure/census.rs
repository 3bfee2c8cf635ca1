//! Census QWI timeseries API client
//!
//! Builds one request per top-level group, asking for the indicator and its
//! paired status flag for every code in the group:
//!
//! `.../qwi/sa?get=Emp,sEmp&for=state:02&year=2012&quarter=1&industry=11&industry=111...&key=...`

use itertools::Itertools;
use serde_json::Value;
use tracing::debug;

use crate::domain::levels::status_column;
use crate::infrastructure::error::{FetchError, FetchResult};
use crate::infrastructure::traits::{IndicatorFetcher, QwiQuery};

/// Default endpoint for seasonally adjusted QWI timeseries data.
pub const DEFAULT_ENDPOINT: &str = "https://api.census.gov/data/timeseries/qwi/sa";

pub struct CensusClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CensusClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> FetchResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("qwi-sunburst/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// Assemble the request URL for one group. Codes and selectors are plain
    /// digit strings, so no percent-encoding is needed.
    fn group_url(&self, query: &QwiQuery, codes: &[String]) -> String {
        let industries = codes
            .iter()
            .map(|code| format!("&industry={code}"))
            .join("");
        let mut url = format!(
            "{}?get={},{}&for=state:{}&year={}&quarter={}{}",
            self.endpoint,
            query.indicator,
            status_column(&query.indicator),
            query.state,
            query.year,
            query.quarter,
            industries,
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(key);
        }
        url
    }
}

impl IndicatorFetcher for CensusClient {
    fn fetch_group(&self, query: &QwiQuery, codes: &[String]) -> FetchResult<Vec<Vec<Value>>> {
        let url = self.group_url(query, codes);
        debug!(%url, "fetching group");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let table: Vec<Vec<Value>> = response.json()?;
        if table.is_empty() {
            return Err(FetchError::EmptyResponse { url });
        }
        Ok(table)
    }
}
