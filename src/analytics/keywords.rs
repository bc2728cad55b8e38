//! Keyword frequency analysis over paper titles
//!
//! Titles are lowercased, punctuation is replaced by spaces, and the
//! remaining tokens are counted after dropping stop-words and tokens of
//! length <= 2.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Non-word, non-space characters; replaced with a space before splitting
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").expect("invalid punctuation regex");

    /// Common English function words excluded from the frequency count
    static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "an", "the", "and", "or", "but", "if", "because", "as", "what",
        "which", "this", "that", "these", "those", "then", "just", "so", "than",
        "such", "both", "through", "about", "for", "is", "of", "while", "during",
        "to", "from", "in", "on", "by", "with", "without", "at", "between",
    ]
    .into_iter()
    .collect();
}

/// Token frequency map over lowercase keywords
pub type WordFrequencies = HashMap<String, u64>;

/// Minimum token length kept in the frequency count (exclusive bound)
const MIN_TOKEN_LEN: usize = 2;

/// Count keyword frequencies across a set of titles
///
/// Empty input yields an empty map.
#[must_use]
pub fn keyword_frequencies<'a, I>(titles: I) -> WordFrequencies
where
    I: IntoIterator<Item = &'a str>,
{
    let blob = titles.into_iter().collect::<Vec<_>>().join(" ").to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&blob, " ");

    let mut frequencies = WordFrequencies::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() <= MIN_TOKEN_LEN || STOP_WORDS.contains(token) {
            continue;
        }
        *frequencies.entry(token.to_string()).or_insert(0) += 1;
    }

    frequencies
}

/// Top-N keywords, most frequent first
///
/// Equal counts are broken lexicographically so the ranking is deterministic.
#[must_use]
pub fn top_keywords(frequencies: &WordFrequencies, n: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = frequencies
        .iter()
        .map(|(word, &count)| (word.clone(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
