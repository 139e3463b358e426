use thiserror::Error;

/// Boxed error from an external collaborator (search stream, document store).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("malformed record: missing string field `{0}`")]
    MalformedRecord(&'static str),

    #[error("cannot compute percentages over an empty collection")]
    EmptyCollection,

    #[error("record source failed: {0}")]
    Source(#[source] BoxError),

    #[error("record sink failed: {0}")]
    Sink(#[source] BoxError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
