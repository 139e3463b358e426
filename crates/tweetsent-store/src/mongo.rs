//! Document-store sink: one `insert_one` per raw record, no batching.

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::{Client, Collection};
use tweetsent_core::{RawRecord, RecordSink};

use crate::error::StoreError;

/// Writes raw records into a fixed database/collection pair.
pub struct MongoSink {
    collection: Collection<Document>,
}

impl MongoSink {
    /// Connect to `uri` and target `database.collection`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first insert rather than here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Mongo`] if the connection string is invalid.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let collection = client.database(database).collection::<Document>(collection);
        tracing::debug!(
            database,
            collection = collection.name(),
            "document store sink ready"
        );
        Ok(Self { collection })
    }

    /// Insert one record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if the record cannot be represented as
    /// BSON, or [`StoreError::Mongo`] if the write fails.
    pub async fn insert_record(&self, record: &RawRecord) -> Result<(), StoreError> {
        let doc = encode_record(record)?;
        self.collection.insert_one(doc).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordSink for MongoSink {
    type Error = StoreError;

    async fn insert(&self, record: &RawRecord) -> Result<(), StoreError> {
        self.insert_record(record).await
    }
}

/// Convert a JSON object into a BSON document, field order preserved.
pub(crate) fn encode_record(record: &RawRecord) -> Result<Document, StoreError> {
    Ok(mongodb::bson::to_document(record)?)
}
