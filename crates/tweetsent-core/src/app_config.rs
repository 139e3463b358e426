use std::path::PathBuf;

/// Runtime configuration for one pipeline run.
///
/// Built once at startup by [`crate::load_app_config`] and passed into the
/// orchestrator; nothing in the workspace reads credentials from globals.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_secret: String,
    pub dev_env_label: String,
    pub log_level: String,
    pub query_path: PathBuf,
    pub credentials_path: PathBuf,
    pub mongo_uri: String,
    pub mongo_database: String,
    pub mongo_collection: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("api_secret", &"[redacted]")
            .field("dev_env_label", &self.dev_env_label)
            .field("log_level", &self.log_level)
            .field("query_path", &self.query_path)
            .field("credentials_path", &self.credentials_path)
            .field("mongo_uri", &self.mongo_uri)
            .field("mongo_database", &self.mongo_database)
            .field("mongo_collection", &self.mongo_collection)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .finish()
    }
}
