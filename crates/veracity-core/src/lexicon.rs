//! Built-in word-list tagger.
//!
//! Words are split on whitespace, trimmed of surrounding punctuation, and
//! lowercased before lookup. A word found in more than one list counts once,
//! in the first list that holds it: positive, then negative, then neutral.

use std::collections::HashSet;

use crate::config::LexiconConfig;
use crate::error::AnalysisResult;
use crate::sentiment::{TagCounts, Tagger};

/// Terms counted as positive.
pub const POSITIVE_TERMS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "love",
    "loved",
    "loves",
    "best",
    "amazing",
    "awesome",
    "fantastic",
    "perfect",
    "wonderful",
    "happy",
    "recommend",
    "recommended",
    "nice",
    "pleased",
    "satisfied",
    "superb",
    "reliable",
    "comfortable",
    "beautiful",
    "impressive",
    "enjoy",
    "enjoyed",
    "sturdy",
    "worth",
    "helpful",
    "friendly",
    "delicious",
];

/// Terms counted as negative.
pub const NEGATIVE_TERMS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "worst",
    "hate",
    "hated",
    "poor",
    "broken",
    "broke",
    "disappointed",
    "disappointing",
    "useless",
    "waste",
    "defective",
    "horrible",
    "flimsy",
    "refund",
    "rude",
    "slow",
    "unhappy",
    "annoying",
    "failed",
    "faulty",
    "overpriced",
    "mediocre",
];

/// Terms counted as neutral.
pub const NEUTRAL_TERMS: &[&str] = &[
    "okay",
    "ok",
    "average",
    "fine",
    "decent",
    "normal",
    "standard",
    "expected",
    "typical",
    "ordinary",
    "adequate",
    "fair",
    "acceptable",
    "moderate",
    "usual",
];

/// A [`Tagger`] backed by fixed word lists.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    positive: HashSet<String>,
    negative: HashSet<String>,
    neutral: HashSet<String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self {
            positive: owned(POSITIVE_TERMS),
            negative: owned(NEGATIVE_TERMS),
            neutral: owned(NEUTRAL_TERMS),
        }
    }
}

impl LexiconTagger {
    /// The built-in lists extended with configured inline terms.
    ///
    /// Call [`LexiconConfig::resolve`] first to include a lexicon file.
    pub fn from_config(config: &LexiconConfig) -> Self {
        let mut tagger = Self::default();
        tagger.positive.extend(normalized(&config.positive));
        tagger.negative.extend(normalized(&config.negative));
        tagger.neutral.extend(normalized(&config.neutral));
        tagger
    }

    /// Count tagged words in `text`.
    pub fn counts(&self, text: &str) -> TagCounts {
        let mut counts = TagCounts::default();
        for word in words(text) {
            if self.positive.contains(&word) {
                counts.positive += 1;
            } else if self.negative.contains(&word) {
                counts.negative += 1;
            } else if self.neutral.contains(&word) {
                counts.neutral += 1;
            }
        }
        counts
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> AnalysisResult<TagCounts> {
        Ok(self.counts(text))
    }
}

fn owned(terms: &[&str]) -> HashSet<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}

fn normalized(terms: &[String]) -> impl Iterator<Item = String> + '_ {
    terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
}

/// Lowercased words with surrounding punctuation removed.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
