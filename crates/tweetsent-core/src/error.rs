use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {path}: {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("key '{key}' not found in {path}")]
    MissingKey { path: String, key: String },

    #[error("validation error: {0}")]
    Validation(String),
}
