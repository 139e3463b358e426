//! Shared configuration and record plumbing for the tweetsent workspace.

pub mod app_config;
pub mod config;
pub mod credentials;
pub mod error;
pub mod query;
pub mod record;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use credentials::{
    load_credentials, write_credentials_file, SearchCredentials, CREDENTIALS_YAML_KEY,
};
pub use error::ConfigError;
pub use query::{load_search_query, ResultScope, SearchQuery};
pub use record::{RawRecord, RecordSink, RecordSource};
