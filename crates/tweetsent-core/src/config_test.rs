use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid values.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("TWEETSENT_API_KEY", "key");
    m.insert("TWEETSENT_API_SECRET", "secret");
    m.insert("TWEETSENT_DEV_ENV_LABEL", "i6example");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TWEETSENT_API_KEY"),
        "expected MissingEnvVar(TWEETSENT_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_dev_env_label() {
    let mut map = full_env();
    map.remove("TWEETSENT_DEV_ENV_LABEL");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TWEETSENT_DEV_ENV_LABEL"),
        "expected MissingEnvVar(TWEETSENT_DEV_ENV_LABEL), got: {result:?}"
    );
}

#[test]
fn blank_required_var_counts_as_missing() {
    let mut map = full_env();
    map.insert("TWEETSENT_API_SECRET", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TWEETSENT_API_SECRET"),
        "expected MissingEnvVar(TWEETSENT_API_SECRET), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_key, "key");
    assert_eq!(cfg.dev_env_label, "i6example");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.query_path, PathBuf::from("./config/query.yaml"));
    assert_eq!(cfg.credentials_path, PathBuf::from("./twitter_keys.yaml"));
    assert_eq!(cfg.mongo_uri, "mongodb://localhost:27017");
    assert_eq!(cfg.mongo_database, "tweets");
    assert_eq!(cfg.mongo_collection, "thirty3");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.max_retries, 3);
    assert_eq!(cfg.retry_backoff_base_ms, 1000);
}

#[test]
fn mongo_settings_override() {
    let mut map = full_env();
    map.insert("TWEETSENT_MONGO_URI", "mongodb://db:27017");
    map.insert("TWEETSENT_MONGO_DATABASE", "archive");
    map.insert("TWEETSENT_MONGO_COLLECTION", "rail");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.mongo_uri, "mongodb://db:27017");
    assert_eq!(cfg.mongo_database, "archive");
    assert_eq!(cfg.mongo_collection, "rail");
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("TWEETSENT_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TWEETSENT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(TWEETSENT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_rejected() {
    let mut map = full_env();
    map.insert("TWEETSENT_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TWEETSENT_REQUEST_TIMEOUT_SECS"
    ));
}

#[test]
fn max_retries_override() {
    let mut map = full_env();
    map.insert("TWEETSENT_MAX_RETRIES", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_retries, 5);
}

#[test]
fn max_retries_invalid() {
    let mut map = full_env();
    map.insert("TWEETSENT_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TWEETSENT_MAX_RETRIES"),
        "expected InvalidEnvVar(TWEETSENT_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn retry_backoff_base_ms_override() {
    let mut map = full_env();
    map.insert("TWEETSENT_RETRY_BACKOFF_BASE_MS", "250");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.retry_backoff_base_ms, 250);
}

#[test]
fn debug_output_redacts_secrets() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret\""), "secret leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
