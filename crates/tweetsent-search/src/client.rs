//! HTTP client for the premium historical search API.
//!
//! Wraps `reqwest` with the client-credentials token exchange, per-page
//! search requests, and mapping of non-2xx responses into
//! [`SearchError::Api`]. Transient failures are retried via
//! [`crate::retry::retry_with_backoff`].

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tweetsent_core::{SearchCredentials, SearchQuery};

use crate::error::SearchError;
use crate::retry::retry_with_backoff;
use crate::stream::ResultStream;
use crate::types::{ErrorEnvelope, RulePayload, SearchPage, TokenResponse};

const DEFAULT_TOKEN_URL: &str = "https://api.twitter.com/oauth2/token";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// Client for one search endpoint.
///
/// Use [`SearchClient::new`] for production or
/// [`SearchClient::with_token_url`] to point the token exchange at a mock
/// server in tests.
pub struct SearchClient {
    client: Client,
    endpoint: Url,
    token_url: Url,
    consumer_key: String,
    consumer_secret: String,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl SearchClient {
    /// Creates a client for the endpoint named in `creds`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`SearchError::InvalidEndpoint`] if the endpoint is
    /// not a valid URL.
    pub fn new(creds: &SearchCredentials, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_token_url(creds, timeout_secs, DEFAULT_TOKEN_URL)
    }

    /// Creates a client with a custom token URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::new`], and also if `token_url` is invalid.
    pub fn with_token_url(
        creds: &SearchCredentials,
        timeout_secs: u64,
        token_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tweetsent/0.1 (historical-search)")
            .build()?;

        Ok(Self {
            client,
            endpoint: parse_url(&creds.endpoint)?,
            token_url: parse_url(token_url)?,
            consumer_key: creds.consumer_key.clone(),
            consumer_secret: creds.consumer_secret.clone(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        })
    }

    /// Overrides the retry budget and back-off base delay.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Opens a lazy record stream for `query`.
    ///
    /// No request is sent until the first record is pulled.
    #[must_use]
    pub fn stream(&self, query: &SearchQuery) -> ResultStream<'_> {
        ResultStream::new(self, RulePayload::from_query(query), query.max_results)
    }

    /// Exchanges the consumer key and secret for an application bearer token.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Auth`] if the service rejects the credentials or
    ///   returns a non-bearer token.
    /// - [`SearchError::Http`] on network failure.
    pub async fn fetch_bearer_token(&self) -> Result<String, SearchError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, move || {
            self.request_bearer_token()
        })
        .await
    }

    /// Fetches a single page of results for `rule`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Api`] on a non-2xx response (after retries for 429/5xx).
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::Deserialize`] if the page does not match the expected shape.
    pub async fn fetch_page(
        &self,
        bearer: &str,
        rule: &RulePayload,
    ) -> Result<SearchPage, SearchError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, move || {
            self.request_page(bearer, rule)
        })
        .await
    }

    async fn request_bearer_token(&self) -> Result<String, SearchError> {
        let response = self
            .client
            .post(self.token_url.clone())
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let token: TokenResponse = match read_json(response, "oauth2/token").await {
            Ok(token) => token,
            // Keep 429/5xx as Api errors so the retry loop still sees them.
            Err(SearchError::Api { status, message }) if status != 429 && status < 500 => {
                return Err(SearchError::Auth(format!(
                    "token endpoint returned {status}: {message}"
                )));
            }
            Err(e) => return Err(e),
        };

        if !token.token_type.eq_ignore_ascii_case("bearer") || token.access_token.is_empty() {
            return Err(SearchError::Auth(format!(
                "unexpected token type '{}'",
                token.token_type
            )));
        }
        Ok(token.access_token)
    }

    async fn request_page(
        &self,
        bearer: &str,
        rule: &RulePayload,
    ) -> Result<SearchPage, SearchError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(bearer)
            .json(rule)
            .send()
            .await?;
        read_json(response, self.endpoint.as_str()).await
    }
}

/// Reads the body and decodes it as `T`, or maps a non-2xx status into
/// [`SearchError::Api`] with the service's error message when it sent one.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, SearchError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .ok()
            .and_then(ErrorEnvelope::message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        return Err(SearchError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

fn parse_url(raw: &str) -> Result<Url, SearchError> {
    Url::parse(raw).map_err(|e| SearchError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}
