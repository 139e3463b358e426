//! Percentage breakdown and sample listing for a finished collection.

use std::io::Write;

use crate::error::SentimentError;
use crate::types::{ClassifiedPost, Sentiment};

/// Sample texts printed per label.
pub const SAMPLE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub positive_samples: Vec<String>,
    pub negative_samples: Vec<String>,
}

impl SentimentReport {
    /// Counts labels over `posts`, keeping the first [`SAMPLE_LIMIT`]
    /// positive and negative texts in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::EmptyCollection`] if `posts` is empty.
    pub fn from_posts(posts: &[ClassifiedPost]) -> Result<Self, SentimentError> {
        if posts.is_empty() {
            return Err(SentimentError::EmptyCollection);
        }

        let mut report = Self {
            total: posts.len(),
            positive: 0,
            negative: 0,
            positive_samples: Vec::new(),
            negative_samples: Vec::new(),
        };
        for post in posts {
            let (count, samples) = match post.sentiment {
                Sentiment::Positive => (&mut report.positive, &mut report.positive_samples),
                Sentiment::Negative => (&mut report.negative, &mut report.negative_samples),
                Sentiment::Neutral => continue,
            };
            *count += 1;
            if samples.len() < SAMPLE_LIMIT {
                samples.push(post.text.clone());
            }
        }
        Ok(report)
    }

    #[must_use]
    pub fn positive_pct(&self) -> f64 {
        percentage(self.positive, self.total)
    }

    #[must_use]
    pub fn negative_pct(&self) -> f64 {
        percentage(self.negative, self.total)
    }

    /// Complement of the positive and negative counts, not a count of
    /// neutral posts.
    #[must_use]
    pub fn neutral_pct(&self) -> f64 {
        percentage(self.total - (self.negative + self.positive), self.total)
    }

    /// Renders the console report.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Io`] if writing to `out` fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), SentimentError> {
        writeln!(out, "Positive tweets percentage: {:?} %", self.positive_pct())?;
        writeln!(out, "Negative tweets percentage: {:?} %", self.negative_pct())?;
        writeln!(out, "Neutral tweets percentage: {:?} %", self.neutral_pct())?;

        writeln!(out, "\n\nPositive tweets:")?;
        for text in &self.positive_samples {
            writeln!(out, "{text}")?;
        }

        writeln!(out, "\n\nNegative tweets:")?;
        for text in &self.negative_samples {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(count: usize, total: usize) -> f64 {
    (100 * count) as f64 / total as f64
}
