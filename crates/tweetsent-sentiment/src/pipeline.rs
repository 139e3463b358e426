//! Fetch, store, classify, aggregate.

use std::io::Write;

use tweetsent_core::{RecordSink, RecordSource};

use crate::classifier::SentimentClassifier;
use crate::collection::PostCollection;
use crate::error::SentimentError;
use crate::report::SentimentReport;
use crate::scorer::PolarityScorer;
use crate::types::Post;

/// Record counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub fetched: usize,
    pub stored: usize,
    pub kept: usize,
    pub duplicates_skipped: usize,
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub summary: PipelineSummary,
    pub report: SentimentReport,
    pub collection: PostCollection,
}

/// Drain `source` one record at a time, then print the report to `out`.
///
/// Each record is classified, written to `sink` with its label attached, and
/// appended to the in-memory collection under the retweet dedup rule. The
/// report is rendered only after the source is exhausted.
///
/// The first failure aborts the run. Records already written to `sink` stay
/// there.
///
/// # Errors
///
/// - [`SentimentError::Source`] / [`SentimentError::Sink`] when a collaborator fails.
/// - [`SentimentError::MalformedRecord`] for a record without string `text`.
/// - [`SentimentError::EmptyCollection`] if the source yielded nothing.
/// - [`SentimentError::Io`] if the report cannot be written.
pub async fn run_pipeline<Src, Snk, S, W>(
    source: &mut Src,
    sink: &Snk,
    classifier: &SentimentClassifier<S>,
    out: &mut W,
) -> Result<PipelineOutcome, SentimentError>
where
    Src: RecordSource,
    Snk: RecordSink,
    S: PolarityScorer,
    W: Write,
{
    let mut summary = PipelineSummary::default();
    let mut collection = PostCollection::new();

    while let Some(raw) = source
        .next_record()
        .await
        .map_err(|e| SentimentError::Source(Box::new(e)))?
    {
        summary.fetched += 1;

        let mut post = Post::from_raw(raw)?;
        let classified = post.classify(classifier);

        sink.insert(post.document())
            .await
            .map_err(|e| SentimentError::Sink(Box::new(e)))?;
        summary.stored += 1;

        if !collection.push(classified, post.engagement()) {
            tracing::debug!(
                engagement = post.engagement(),
                "duplicate retweeted post skipped"
            );
        }
    }

    summary.kept = collection.len();
    summary.duplicates_skipped = collection.duplicates_skipped();
    tracing::info!(
        fetched = summary.fetched,
        stored = summary.stored,
        kept = summary.kept,
        duplicates_skipped = summary.duplicates_skipped,
        "collection complete"
    );

    if collection.is_empty() {
        tracing::warn!("search returned no posts; nothing to report");
    }
    let report = SentimentReport::from_posts(collection.posts())?;
    report.write_to(out)?;
    out.flush()?;

    Ok(PipelineOutcome {
        summary,
        report,
        collection,
    })
}
