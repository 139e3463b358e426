//! Text to label: clean, score, map the sign.

use crate::clean::clean_text;
use crate::scorer::{LexiconScorer, PolarityScorer};
use crate::types::Sentiment;

/// Full result of classifying one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub cleaned: String,
    pub polarity: f32,
    pub sentiment: Sentiment,
}

/// Classifies text with a pluggable polarity scorer.
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier<S = LexiconScorer> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        clean_text(text)
    }

    /// Polarity of the cleaned text.
    #[must_use]
    pub fn polarity(&self, text: &str) -> f32 {
        self.scorer.polarity(&clean_text(text))
    }

    #[must_use]
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }

    /// Cleans once and returns every intermediate value.
    #[must_use]
    pub fn analyze(&self, text: &str) -> Analysis {
        let cleaned = clean_text(text);
        let polarity = self.scorer.polarity(&cleaned);
        Analysis {
            sentiment: Sentiment::from_polarity(polarity),
            polarity,
            cleaned,
        }
    }
}
