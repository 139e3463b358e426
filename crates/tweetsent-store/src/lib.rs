//! MongoDB persistence for raw search records.

pub mod error;
pub mod mongo;

pub use error::StoreError;
pub use mongo::MongoSink;
