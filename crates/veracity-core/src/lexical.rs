//! Lexical metrics: word counts, vocabulary size, word length, and emotion
//! intensity.
//!
//! Tokens are runs of non-whitespace. Punctuation stays attached to its token,
//! and uniqueness is decided after lowercasing only.
//!
//! Emotion intensity:
//! `min(1, (emotional * 0.2 + exclamations * 0.15 + capital_runs * 0.1) / 10)`

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::patterns::{Pattern, PatternMatcher};

const EMOTIONAL_WEIGHT: f64 = 0.2;
const EXCLAMATION_WEIGHT: f64 = 0.15;
const CAPITAL_RUN_WEIGHT: f64 = 0.1;
const INTENSITY_SCALE: f64 = 10.0;

/// Lexical metrics for one review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LexicalMetrics {
    /// Number of whitespace-separated tokens.
    pub word_count: usize,
    /// Number of distinct tokens after lowercasing.
    pub unique_words: usize,
    /// Mean token length in characters, punctuation included.
    pub avg_word_length: f64,
    /// Composite emotion score in `[0, 1]`.
    pub emotion_intensity: f64,
}

impl LexicalMetrics {
    /// Ratio of unique to total words, or `None` for empty input.
    pub fn vocabulary_diversity(&self) -> Option<f64> {
        (self.word_count > 0).then(|| self.unique_words as f64 / self.word_count as f64)
    }
}

/// Split text into whitespace-delimited tokens.
///
/// Empty and whitespace-only input yields no tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Compute [`LexicalMetrics`] for `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_metrics(text: &str, matcher: &PatternMatcher) -> LexicalMetrics {
    let tokens = tokenize(text);
    let word_count = tokens.len();

    let unique_words = tokens
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    let avg_word_length = if word_count > 0 {
        let total: usize = tokens.iter().map(|t| t.chars().count()).sum();
        total as f64 / word_count as f64
    } else {
        0.0
    };

    LexicalMetrics {
        word_count,
        unique_words,
        avg_word_length,
        emotion_intensity: emotion_intensity(text, matcher),
    }
}

/// Emotion intensity of `text`, in `[0, 1]`.
pub fn emotion_intensity(text: &str, matcher: &PatternMatcher) -> f64 {
    let emotional = matcher.count(Pattern::Emotional, text) as f64;
    let exclamations = text.matches('!').count() as f64;
    let capital_runs = matcher.count(Pattern::CapitalRuns, text) as f64;

    let raw = emotional * EMOTIONAL_WEIGHT
        + exclamations * EXCLAMATION_WEIGHT
        + capital_runs * CAPITAL_RUN_WEIGHT;
    (raw / INTENSITY_SCALE).min(1.0)
}
