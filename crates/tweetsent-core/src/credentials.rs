//! Credentials file for the premium search API.
//!
//! The file is regenerated from [`crate::AppConfig`] at startup and read back
//! before the search client is built, so the on-disk copy always matches the
//! environment of the current run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::query::ResultScope;
use crate::ConfigError;

/// Top-level key the credentials live under.
pub const CREDENTIALS_YAML_KEY: &str = "search_tweets_api";

const SEARCH_API_BASE: &str = "https://api.twitter.com/1.1/tweets/search";

/// Account and endpoint details for the search service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCredentials {
    pub account_type: String,
    pub endpoint: String,
    pub consumer_key: String,
    pub consumer_secret: String,
}

impl SearchCredentials {
    /// Credentials for a premium account, with the endpoint templated from
    /// `scope` and the dev environment label.
    #[must_use]
    pub fn premium(
        scope: ResultScope,
        dev_env_label: &str,
        consumer_key: &str,
        consumer_secret: &str,
    ) -> Self {
        Self {
            account_type: "premium".to_string(),
            endpoint: format!("{SEARCH_API_BASE}/{scope}/{dev_env_label}.json"),
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
        }
    }
}

impl std::fmt::Debug for SearchCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCredentials")
            .field("account_type", &self.account_type)
            .field("endpoint", &self.endpoint)
            .field("consumer_key", &"[redacted]")
            .field("consumer_secret", &"[redacted]")
            .finish()
    }
}

/// Write `creds` to `path` as a nested YAML mapping under `yaml_key`.
///
/// Overwrites any existing file.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] or [`ConfigError::FileIo`].
pub fn write_credentials_file(
    path: &Path,
    yaml_key: &str,
    creds: &SearchCredentials,
) -> Result<(), ConfigError> {
    let mut doc = BTreeMap::new();
    doc.insert(yaml_key.to_string(), creds.clone());
    let yaml = serde_yaml::to_string(&doc).map_err(ConfigError::Serialize)?;
    std::fs::write(path, yaml).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })
}

/// Read the credentials stored under `yaml_key` in `path`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, the key is
/// absent, or the endpoint is not an `http(s)` URL.
pub fn load_credentials(path: &Path, yaml_key: &str) -> Result<SearchCredentials, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut doc: BTreeMap<String, SearchCredentials> =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.display().to_string(),
            source: e,
        })?;

    let creds = doc.remove(yaml_key).ok_or_else(|| ConfigError::MissingKey {
        path: path.display().to_string(),
        key: yaml_key.to_string(),
    })?;

    if !(creds.endpoint.starts_with("https://") || creds.endpoint.starts_with("http://")) {
        return Err(ConfigError::Validation(format!(
            "endpoint '{}' is not an http(s) URL",
            creds.endpoint
        )));
    }

    Ok(creds)
}
