//! Frequency-based keyword extraction.
//!
//! Keywords are the most frequent lowercase tokens in an article body once
//! punctuation, stop words and short tokens (three characters or fewer) are
//! removed. Equal counts rank by first appearance so results are stable
//! across runs.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Default number of keywords kept per article.
pub const DEFAULT_KEYWORD_COUNT: usize = 3;

/// Tokens must be longer than this many characters to qualify.
const MIN_TOKEN_CHARS: usize = 3;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "them", "their", "what", "which", "who",
    "when", "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
];

static DEFAULT_STOP_WORDS: Lazy<StopWords> =
    Lazy::new(|| StopWords::new(ENGLISH_STOP_WORDS.iter().copied()));

// Anything that is not a letter, number, underscore or whitespace. Combining
// marks count as punctuation, so decomposed accents split a word.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").unwrap());

/// An immutable set of words excluded from keyword ranking.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from any word list. Words are stored lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The built-in English function-word list.
    pub fn english() -> &'static StopWords {
        &DEFAULT_STOP_WORDS
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Return up to `count` keywords from `text`, most frequent first.
///
/// Ties are broken by the position of each token's first occurrence in the
/// filtered token stream. The result never contains duplicates, stop words,
/// or tokens of three characters or fewer.
///
/// # Examples
///
/// ```ignore
/// let text = "The quick brown fox jumps over the lazy dog. Foxes are quick.";
/// assert_eq!(
///     extract_keywords(text, 3, StopWords::english()),
///     vec!["quick", "brown", "jumps"]
/// );
/// ```
pub fn extract_keywords(text: &str, count: usize, stop_words: &StopWords) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&lowered, " ");

    // token -> (occurrences, first index)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let qualifying = cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS && !stop_words.contains(token));
    for (index, token) in qualifying.enumerate() {
        counts.entry(token).or_insert((0, index)).0 += 1;
    }

    counts
        .into_iter()
        .sorted_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        })
        .take(count)
        .map(|(token, _)| token.to_string())
        .collect()
}
