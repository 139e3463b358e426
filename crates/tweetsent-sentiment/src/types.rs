use serde_json::Value;
use tweetsent_core::RawRecord;

use crate::classifier::SentimentClassifier;
use crate::error::SentimentError;
use crate::scorer::PolarityScorer;

/// Field name the label is stored under in the persisted document.
pub const SENTIMENT_FIELD: &str = "sentiment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Maps the sign of a polarity score onto a label. Exactly zero is neutral.
    #[must_use]
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reported view of one post: cleaned text, label, timestamp.
///
/// Equality is structural over all three fields, which is what the retweet
/// dedup rule compares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedPost {
    pub text: String,
    pub sentiment: Sentiment,
    pub created_at: Option<String>,
}

/// One search result plus its derived label.
///
/// The stored document and the reported view both come from this value, so
/// they always carry the same label.
#[derive(Debug, Clone)]
pub struct Post {
    raw: RawRecord,
    text: String,
    classified: Option<ClassifiedPost>,
}

impl Post {
    /// Wraps a raw record.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::MalformedRecord`] if the record has no
    /// string `text` field.
    pub fn from_raw(raw: RawRecord) -> Result<Self, SentimentError> {
        let text = raw
            .get("text")
            .and_then(Value::as_str)
            .ok_or(SentimentError::MalformedRecord("text"))?
            .to_string();
        Ok(Self {
            raw,
            text,
            classified: None,
        })
    }

    #[must_use]
    pub fn created_at(&self) -> Option<&str> {
        self.raw.get("created_at").and_then(Value::as_str)
    }

    /// Retweet count; absent or non-numeric counts as zero.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.raw
            .get("retweet_count")
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    /// Labels the post and records the label on the stored document.
    ///
    /// A post is classified at most once; later calls return the first
    /// result unchanged.
    pub fn classify<S: PolarityScorer>(
        &mut self,
        classifier: &SentimentClassifier<S>,
    ) -> ClassifiedPost {
        if let Some(existing) = &self.classified {
            return existing.clone();
        }

        let analysis = classifier.analyze(&self.text);
        self.raw.insert(
            SENTIMENT_FIELD.to_string(),
            Value::String(analysis.sentiment.as_str().to_string()),
        );

        let view = ClassifiedPost {
            text: analysis.cleaned,
            sentiment: analysis.sentiment,
            created_at: self.created_at().map(str::to_string),
        };
        self.classified = Some(view.clone());
        view
    }

    /// The document to persist: every raw field, plus `sentiment` once classified.
    #[must_use]
    pub fn document(&self) -> &RawRecord {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::scorer::LexiconScorer;

    fn raw(value: Value) -> RawRecord {
        value.as_object().cloned().expect("test value must be an object")
    }

    #[test]
    fn from_polarity_uses_sign() {
        assert_eq!(Sentiment::from_polarity(0.01), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.5), Sentiment::Negative);
    }

    #[test]
    fn sentiment_display_is_lowercase() {
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert_eq!(Sentiment::Neutral.to_string(), "neutral");
        assert_eq!(Sentiment::Negative.to_string(), "negative");
    }

    #[test]
    fn from_raw_requires_text() {
        let err = Post::from_raw(raw(json!({"id": 1}))).unwrap_err();
        assert!(matches!(err, SentimentError::MalformedRecord("text")));

        let err = Post::from_raw(raw(json!({"text": 12}))).unwrap_err();
        assert!(matches!(err, SentimentError::MalformedRecord("text")));
    }

    #[test]
    fn engagement_defaults_to_zero() {
        let post = Post::from_raw(raw(json!({"text": "x"}))).unwrap();
        assert_eq!(post.engagement(), 0);

        let post = Post::from_raw(raw(json!({"text": "x", "retweet_count": 4}))).unwrap();
        assert_eq!(post.engagement(), 4);
    }

    #[test]
    fn classify_adds_label_to_document() {
        let classifier = SentimentClassifier::<LexiconScorer>::default();
        let mut post = Post::from_raw(raw(json!({
            "id": 7,
            "text": "I love trains! http://t.co/xyz",
            "created_at": "Fri Jan 29 10:00:00 +0000 2021",
            "retweet_count": 0
        })))
        .unwrap();
        assert!(post.document().get(SENTIMENT_FIELD).is_none());

        let view = post.classify(&classifier);

        assert_eq!(view.text, "I love trains");
        assert_eq!(view.sentiment, Sentiment::Positive);
        assert_eq!(view.created_at.as_deref(), Some("Fri Jan 29 10:00:00 +0000 2021"));
        assert_eq!(post.document()[SENTIMENT_FIELD], "positive");
        assert_eq!(post.document()["id"], 7);
        assert_eq!(post.document()["text"], "I love trains! http://t.co/xyz");
    }

    #[test]
    fn classify_is_idempotent() {
        let classifier = SentimentClassifier::<LexiconScorer>::default();
        let mut post = Post::from_raw(raw(json!({"text": "terrible delays"}))).unwrap();
        let first = post.classify(&classifier);
        let second = post.classify(&classifier);
        assert_eq!(first, second);
        assert_eq!(post.document().len(), 2);
    }
}
