use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = require("TWEETSENT_API_KEY")?;
    let api_secret = require("TWEETSENT_API_SECRET")?;
    let dev_env_label = require("TWEETSENT_DEV_ENV_LABEL")?;

    let log_level = or_default("TWEETSENT_LOG_LEVEL", "info");
    let query_path = PathBuf::from(or_default("TWEETSENT_QUERY_PATH", "./config/query.yaml"));
    let credentials_path = PathBuf::from(or_default(
        "TWEETSENT_CREDENTIALS_PATH",
        "./twitter_keys.yaml",
    ));

    let mongo_uri = or_default("TWEETSENT_MONGO_URI", "mongodb://localhost:27017");
    let mongo_database = or_default("TWEETSENT_MONGO_DATABASE", "tweets");
    let mongo_collection = or_default("TWEETSENT_MONGO_COLLECTION", "thirty3");

    let request_timeout_secs = parse_u64("TWEETSENT_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TWEETSENT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let max_retries = parse_u32("TWEETSENT_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("TWEETSENT_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        api_key,
        api_secret,
        dev_env_label,
        log_level,
        query_path,
        credentials_path,
        mongo_uri,
        mongo_database,
        mongo_collection,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
