use thiserror::Error;

/// Errors returned by the search API client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("search API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The bearer-token exchange was rejected or returned an unusable token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service kept sending empty pages with a `next` token.
    #[error("pagination limit reached: {empty_pages} consecutive empty pages")]
    PaginationLimit { empty_pages: usize },

    /// An endpoint from the credentials file is not a valid URL.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
