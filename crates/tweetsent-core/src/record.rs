//! Seams between the orchestrator and its external collaborators.

use async_trait::async_trait;

/// One search result exactly as the service returned it.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// A lazy, finite, non-restartable sequence of raw records.
#[async_trait]
pub trait RecordSource: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Next record, or `None` once the source is exhausted.
    async fn next_record(&mut self) -> Result<Option<RawRecord>, Self::Error>;
}

/// Durable destination for raw records, written one at a time.
#[async_trait]
pub trait RecordSink: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn insert(&self, record: &RawRecord) -> Result<(), Self::Error>;
}
