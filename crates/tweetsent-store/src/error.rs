use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("BSON encode error: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
}
