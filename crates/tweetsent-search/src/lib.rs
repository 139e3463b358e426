//! Client for the premium historical search API.
//!
//! [`SearchClient`] handles the bearer-token exchange and single-page fetches;
//! [`ResultStream`] turns those pages into a lazy, capped record sequence.

pub mod client;
pub mod error;
pub mod retry;
pub mod stream;
pub mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use stream::{ResultStream, MAX_CONSECUTIVE_EMPTY_PAGES};
pub use types::{RulePayload, SearchPage};
