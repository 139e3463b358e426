//! Polarity scoring.
//!
//! [`PolarityScorer`] is the seam; [`LexiconScorer`] is the built-in general
//! English implementation used when nothing else is plugged in.

/// Produces a signed sentiment estimate in `[-1.0, 1.0]` for cleaned text.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f32;
}

/// General-purpose word polarities.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("great", 0.8),
    ("good", 0.7),
    ("excellent", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("happy", 0.8),
    ("glad", 0.5),
    ("nice", 0.6),
    ("amazing", 0.6),
    ("brilliant", 0.9),
    ("fantastic", 0.4),
    ("wonderful", 1.0),
    ("awesome", 1.0),
    ("perfect", 1.0),
    ("pleasant", 0.7),
    ("friendly", 0.4),
    ("helpful", 0.5),
    ("comfortable", 0.4),
    ("smooth", 0.4),
    ("clean", 0.4),
    ("quick", 0.3),
    ("fast", 0.2),
    ("punctual", 0.5),
    ("reliable", 0.4),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("well", 0.1),
    // Negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("poor", -0.4),
    ("late", -0.3),
    ("slow", -0.3),
    ("cancelled", -0.4),
    ("canceled", -0.4),
    ("stuck", -0.3),
    ("broken", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("annoying", -0.8),
    ("annoyed", -0.6),
    ("angry", -0.5),
    ("sad", -0.5),
    ("wrong", -0.5),
    ("ridiculous", -0.3),
    ("shocking", -1.0),
    ("disgraceful", -0.8),
    ("useless", -0.5),
    ("chaos", -0.5),
    ("crowded", -0.3),
    ("dirty", -0.6),
    ("rude", -0.3),
    ("unacceptable", -0.8),
    ("nightmare", -0.7),
];

/// Words that flip and dampen the polarity of the following lexicon word.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "cant",
    "cannot", "wont", "without",
];

/// Words that scale the polarity of the following lexicon word.
const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.3),
    ("quite", 1.1),
    ("slightly", 0.5),
];

/// Multiplier applied to a negated word's polarity.
const NEGATION_FACTOR: f32 = -0.5;

/// Lexicon scorer: mean polarity of matched words, clamped to `[-1.0, 1.0]`.
///
/// A negator directly before a matched word (or before its intensifier)
/// multiplies that word by [`NEGATION_FACTOR`]. Returns `0.0` when no word
/// matches, including for empty text.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: &'static [(&'static str, f32)],
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self { lexicon: LEXICON }
    }
}

impl LexiconScorer {
    /// A scorer over a caller-supplied lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: &'static [(&'static str, f32)]) -> Self {
        Self { lexicon }
    }

    fn weight(&self, word: &str) -> Option<f32> {
        self.lexicon
            .iter()
            .find(|(w, _)| *w == word)
            .map(|&(_, weight)| weight)
    }
}

fn intensity(word: &str) -> Option<f32> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, m)| m)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word)
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f32 {
        let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

        let mut total = 0.0_f32;
        let mut matched = 0_u16;
        for (i, word) in words.iter().enumerate() {
            let Some(mut weight) = self.weight(word) else {
                continue;
            };

            let mut modifier_at = i;
            if i > 0 {
                if let Some(m) = intensity(&words[i - 1]) {
                    weight = (weight * m).clamp(-1.0, 1.0);
                    modifier_at = i - 1;
                }
            }
            if modifier_at > 0 && is_negator(&words[modifier_at - 1]) {
                weight *= NEGATION_FACTOR;
            }

            total += weight;
            matched = matched.saturating_add(1);
        }

        if matched == 0 {
            return 0.0;
        }
        (total / f32::from(matched)).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f32 {
        LexiconScorer::default().polarity(text)
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(score("the train to Walsall"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let s = score("I love trains");
        assert!(s > 0.0, "expected positive score, got {s}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let s = score("train cancelled again");
        assert!(s < 0.0, "expected negative score, got {s}");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(score("GREAT service"), score("great service"));
    }

    #[test]
    fn score_is_mean_of_matches() {
        // good (0.7) + late (-0.3) over two matches
        let s = score("good staff but late");
        assert!((s - 0.2).abs() < 1e-6, "got {s}");
    }

    #[test]
    fn negation_flips_and_dampens() {
        // not good = 0.7 * -0.5
        let s = score("not good");
        assert!((s + 0.35).abs() < 1e-6, "got {s}");
    }

    #[test]
    fn negation_reaches_across_intensifier() {
        let s = score("not very good");
        assert!(s < 0.0, "expected negative score, got {s}");
    }

    #[test]
    fn intensifier_scales_and_clamps() {
        let plain = score("good");
        let boosted = score("very good");
        assert!(boosted > plain);
        assert_eq!(score("extremely excellent"), 1.0);
    }

    #[test]
    fn score_stays_in_range() {
        let s = score("terrible awful horrible worst shocking");
        assert!((-1.0..=1.0).contains(&s));
        assert_eq!(s, -1.0);
    }

    #[test]
    fn custom_lexicon_is_used() {
        static CUSTOM: &[(&str, f32)] = &[("delays", -0.5)];
        let scorer = LexiconScorer::with_lexicon(CUSTOM);
        assert!(scorer.polarity("more delays") < 0.0);
        assert_eq!(scorer.polarity("I love trains"), 0.0);
    }
}
