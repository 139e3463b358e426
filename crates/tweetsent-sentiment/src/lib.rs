//! Sentiment classification and reporting for collected posts.
//!
//! Cleans post text, scores it with a pluggable polarity scorer (a general
//! English lexicon by default), keeps an order-preserving collection with the
//! retweet dedup rule, and renders the percentage report.

pub mod classifier;
pub mod clean;
pub mod collection;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod types;

pub use classifier::{Analysis, SentimentClassifier};
pub use clean::clean_text;
pub use collection::PostCollection;
pub use error::SentimentError;
pub use pipeline::{run_pipeline, PipelineOutcome, PipelineSummary};
pub use report::SentimentReport;
pub use scorer::{LexiconScorer, PolarityScorer};
pub use types::{ClassifiedPost, Post, Sentiment};
