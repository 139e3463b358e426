//! Wire types for the premium search API.

use serde::{Deserialize, Serialize};
use tweetsent_core::{RawRecord, SearchQuery};

/// JSON body POSTed to the search endpoint for every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulePayload {
    pub query: String,
    pub max_results: u32,
    pub from_date: String,
    pub to_date: String,
    /// Pagination token from the previous page; absent on the first request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl RulePayload {
    #[must_use]
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            query: query.query.clone(),
            max_results: query.results_per_call,
            from_date: query.api_from_date(),
            to_date: query.api_to_date(),
            next: None,
        }
    }
}

/// One page of search results.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<RawRecord>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Response from the OAuth2 client-credentials token endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token_type: String,
    pub access_token: String,
}

/// Error envelope. Premium endpoints use `{"error": {...}}`, the older
/// v1.1 surface uses `{"errors": [{...}]}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}

impl ErrorEnvelope {
    pub(crate) fn message(self) -> Option<String> {
        self.error
            .or_else(|| self.errors.into_iter().next())
            .map(|d| d.message)
    }
}
