//! Search query parameters loaded from `config/query.yaml`.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Timestamp format the premium search endpoint expects (`YYYYMMDDhhmm`).
const API_DATE_FORMAT: &str = "%Y%m%d%H%M";

/// Which archive the search service queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultScope {
    /// Last 30 days of posts.
    #[serde(rename = "30day")]
    ThirtyDay,
    /// Complete post history.
    #[serde(rename = "fullarchive")]
    FullArchive,
}

impl ResultScope {
    /// Path segment used in the search endpoint URL.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResultScope::ThirtyDay => "30day",
            ResultScope::FullArchive => "fullarchive",
        }
    }
}

impl std::fmt::Display for ResultScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk shape of the query file. Dates stay strings until validated.
#[derive(Debug, Deserialize)]
struct QueryFile {
    query: String,
    scope: ResultScope,
    results_per_call: u32,
    from_date: String,
    to_date: String,
    max_results: usize,
}

/// Immutable parameters for one historical search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub scope: ResultScope,
    /// Page size requested per API call (100 for sandbox, up to 500 on paid tiers).
    pub results_per_call: u32,
    pub from_date: NaiveDateTime,
    pub to_date: NaiveDateTime,
    /// Total number of records to pull before the stream stops.
    pub max_results: usize,
}

impl SearchQuery {
    /// Build and validate a query from already-parsed values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any parameter is out of range.
    pub fn new(
        query: &str,
        scope: ResultScope,
        results_per_call: u32,
        from_date: NaiveDateTime,
        to_date: NaiveDateTime,
        max_results: usize,
    ) -> Result<Self, ConfigError> {
        let search = Self {
            query: query.trim().to_string(),
            scope,
            results_per_call,
            from_date,
            to_date,
            max_results,
        };
        search.validate()?;
        Ok(search)
    }

    /// `fromDate` in the API wire format.
    #[must_use]
    pub fn api_from_date(&self) -> String {
        self.from_date.format(API_DATE_FORMAT).to_string()
    }

    /// `toDate` in the API wire format.
    #[must_use]
    pub fn api_to_date(&self) -> String {
        self.to_date.format(API_DATE_FORMAT).to_string()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.query.is_empty() {
            return Err(ConfigError::Validation(
                "search query must be non-empty".to_string(),
            ));
        }
        if !(10..=500).contains(&self.results_per_call) {
            return Err(ConfigError::Validation(format!(
                "results_per_call {} out of range; must be between 10 and 500",
                self.results_per_call
            )));
        }
        if self.max_results == 0 {
            return Err(ConfigError::Validation(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.from_date >= self.to_date {
            return Err(ConfigError::Validation(format!(
                "from_date {} must be before to_date {}",
                self.from_date, self.to_date
            )));
        }
        Ok(())
    }
}

/// Load and validate search parameters from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_search_query(path: &Path) -> Result<SearchQuery, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: QueryFile = serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
        path: path.display().to_string(),
        source: e,
    })?;

    SearchQuery::new(
        &file.query,
        file.scope,
        file.results_per_call,
        parse_query_date("from_date", &file.from_date)?,
        parse_query_date("to_date", &file.to_date)?,
        file.max_results,
    )
}

/// Accepts `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`; bare dates mean midnight.
fn parse_query_date(field: &str, raw: &str) -> Result<NaiveDateTime, ConfigError> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            ConfigError::Validation(format!(
                "{field} '{raw}' must be formatted as YYYY-MM-DD or YYYY-MM-DD HH:MM"
            ))
        })
}
