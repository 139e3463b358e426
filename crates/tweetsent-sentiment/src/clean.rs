//! Text cleaning ahead of polarity scoring.

use std::sync::LazyLock;

use regex::Regex;

/// Matches, in one pass, either a single character outside the ASCII
/// alphanumeric/space/tab set or a whole `scheme://...` URL. The URL branch
/// only wins where the first branch cannot match, so URLs are removed before
/// their punctuation is.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^0-9A-Za-z \t])|(\w+://\S+)").expect("valid noise regex")
});

/// Strip URLs and non-alphanumeric characters, then collapse whitespace.
#[must_use]
pub fn clean_text(text: &str) -> String {
    NOISE
        .replace_all(text, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
