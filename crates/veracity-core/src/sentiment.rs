//! Sentiment scoring from tag counts and emotion intensity.
//!
//! Formula, with `total = positive + negative + neutral` (0 treated as 1):
//!
//! ```text
//! base       = (positive - negative) / total
//! score      = clamp(base * (1 + intensity * 0.5), -1, 1)
//! confidence = clamp((total / 10) * (1 - neutral / total), 0, 1)
//! ```
//!
//! Tag counts come from a [`Tagger`]. The tagger is called exactly once per
//! analysis and never retried; if it fails, the result degrades to
//! [`SentimentResult::NEUTRAL`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AnalysisResult;
use crate::outcome::Outcome;

const INTENSITY_BOOST: f64 = 0.5;
const CONFIDENCE_PLATEAU: f64 = 10.0;

/// Counts of sentiment-bearing terms found by a [`Tagger`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TagCounts {
    /// Terms tagged positive.
    pub positive: usize,
    /// Terms tagged negative.
    pub negative: usize,
    /// Terms tagged neutral.
    pub neutral: usize,
}

impl TagCounts {
    /// Construct counts.
    pub const fn new(positive: usize, negative: usize, neutral: usize) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// Sum of all three counts.
    pub const fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// A tagging capability: given text, count positive, negative and neutral
/// terms.
///
/// Closures of the right shape implement this, which keeps test stubs short.
pub trait Tagger: Send + Sync {
    /// Tag `text` and return the counts.
    fn tag(&self, text: &str) -> AnalysisResult<TagCounts>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> AnalysisResult<TagCounts> + Send + Sync,
{
    fn tag(&self, text: &str) -> AnalysisResult<TagCounts> {
        self(text)
    }
}

/// Five-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SentimentLabel {
    /// Score above 0.6.
    #[serde(rename = "Very Positive")]
    VeryPositive,
    /// Score above 0.2.
    Positive,
    /// Score within `[-0.2, 0.2]`.
    Neutral,
    /// Score below -0.2.
    Negative,
    /// Score below -0.6.
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl SentimentLabel {
    /// Map a score to its label. Thresholds are strict.
    pub fn from_score(score: f64) -> Self {
        if score > 0.6 {
            Self::VeryPositive
        } else if score > 0.2 {
            Self::Positive
        } else if score < -0.6 {
            Self::VeryNegative
        } else if score < -0.2 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryPositive => "Very Positive",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
            Self::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment estimate for one review.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentResult {
    /// Score in `[-1, 1]`.
    pub score: f64,
    /// Label derived from the score.
    pub label: SentimentLabel,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl SentimentResult {
    /// Zero-score, zero-confidence neutral result.
    pub const NEUTRAL: Self = Self {
        score: 0.0,
        label: SentimentLabel::Neutral,
        confidence: 0.0,
    };
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Score tag counts, weighted by emotion intensity.
pub fn score_sentiment(counts: TagCounts, emotion_intensity: f64) -> SentimentResult {
    let total = match counts.total() {
        0 => 1.0,
        n => n as f64,
    };

    let base = (counts.positive as f64 - counts.negative as f64) / total;
    let weighted = base * (1.0 + emotion_intensity * INTENSITY_BOOST);
    let score = weighted.clamp(-1.0, 1.0);

    let neutral_share = (counts.neutral as f64 / total).abs();
    let confidence = ((total / CONFIDENCE_PLATEAU) * (1.0 - neutral_share)).clamp(0.0, 1.0);

    SentimentResult {
        score,
        label: SentimentLabel::from_score(score),
        confidence,
    }
}

/// Tag `text` once and score it, degrading to neutral if tagging fails.
#[tracing::instrument(skip_all, fields(text_len = text.len(), emotion_intensity = emotion_intensity))]
pub fn analyze_sentiment(
    text: &str,
    emotion_intensity: f64,
    tagger: &dyn Tagger,
) -> Outcome<SentimentResult> {
    match tagger.tag(text) {
        Ok(counts) => {
            tracing::debug!(?counts, "tagged review");
            Outcome::Complete(score_sentiment(counts, emotion_intensity))
        }
        Err(err) => {
            warn!(error = %err, "sentiment degraded to neutral");
            Outcome::Degraded {
                value: SentimentResult::NEUTRAL,
                cause: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::AnalysisError;

    fn fixed(counts: TagCounts) -> impl Tagger {
        move |_: &str| -> AnalysisResult<TagCounts> { Ok(counts) }
    }

    #[test]
    fn zero_counts_are_neutral() {
        let r = score_sentiment(TagCounts::default(), 0.0);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.label, SentimentLabel::Neutral);
        // total is treated as 1, so confidence is 1/10
        assert!((r.confidence - 0.1).abs() < 1e-12);
    }

    #[test]
    fn intensity_amplifies_score() {
        let calm = score_sentiment(TagCounts::new(2, 1, 1), 0.0);
        let heated = score_sentiment(TagCounts::new(2, 1, 1), 0.8);
        assert!((calm.score - 0.25).abs() < 1e-12);
        assert!((heated.score - 0.35).abs() < 1e-12);
    }

    #[test]
    fn score_is_clamped() {
        let r = score_sentiment(TagCounts::new(5, 0, 0), 1.0);
        assert_eq!(r.score, 1.0);
        assert_eq!(r.label, SentimentLabel::VeryPositive);

        let r = score_sentiment(TagCounts::new(0, 5, 0), 1.0);
        assert_eq!(r.score, -1.0);
        assert_eq!(r.label, SentimentLabel::VeryNegative);
    }

    #[test]
    fn confidence_grows_with_sample_size() {
        let small = score_sentiment(TagCounts::new(2, 0, 0), 0.0);
        let large = score_sentiment(TagCounts::new(20, 0, 0), 0.0);
        assert!((small.confidence - 0.2).abs() < 1e-12);
        assert_eq!(large.confidence, 1.0);
    }

    #[test]
    fn neutral_share_reduces_confidence() {
        let r = score_sentiment(TagCounts::new(0, 0, 8), 0.0);
        assert_eq!(r.confidence, 0.0);

        let r = score_sentiment(TagCounts::new(3, 1, 4), 0.0);
        // (8/10) * (1 - 4/8)
        assert!((r.confidence - 0.4).abs() < 1e-12);
    }

    #[test]
    fn label_boundaries_are_strict() {
        // 3/5 = 0.6 exactly
        let r = score_sentiment(TagCounts::new(3, 0, 2), 0.0);
        assert_eq!(r.score, 0.6);
        assert_eq!(r.label, SentimentLabel::Positive);

        // 1/5 = 0.2 exactly
        let r = score_sentiment(TagCounts::new(1, 0, 4), 0.0);
        assert_eq!(r.score, 0.2);
        assert_eq!(r.label, SentimentLabel::Neutral);

        let r = score_sentiment(TagCounts::new(0, 1, 4), 0.0);
        assert_eq!(r.score, -0.2);
        assert_eq!(r.label, SentimentLabel::Neutral);

        let r = score_sentiment(TagCounts::new(0, 3, 2), 0.0);
        assert_eq!(r.score, -0.6);
        assert_eq!(r.label, SentimentLabel::Negative);
    }

    #[test]
    fn label_mapping_just_past_boundaries() {
        assert_eq!(SentimentLabel::from_score(0.61), SentimentLabel::VeryPositive);
        assert_eq!(SentimentLabel::from_score(0.21), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.21), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(-0.61), SentimentLabel::VeryNegative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn labels_serialize_with_spaces() {
        let json = serde_json::to_string(&SentimentLabel::VeryNegative).unwrap();
        assert_eq!(json, "\"Very Negative\"");
        assert_eq!(SentimentLabel::VeryPositive.to_string(), "Very Positive");
    }

    #[test]
    fn tagger_failure_degrades_to_neutral() {
        let failing = |_: &str| -> AnalysisResult<TagCounts> {
            Err(AnalysisError::Tagger("service unavailable".to_string()))
        };
        let outcome = analyze_sentiment("great stuff", 0.3, &failing);
        assert!(outcome.is_degraded());
        assert!(outcome.cause().unwrap().contains("service unavailable"));
        assert_eq!(outcome.into_inner(), SentimentResult::NEUTRAL);
    }

    #[test]
    fn tagger_called_exactly_once() {
        let calls = AtomicUsize::new(0);
        let counting = |_: &str| -> AnalysisResult<TagCounts> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(TagCounts::new(1, 0, 0))
        };
        let outcome = analyze_sentiment("fine", 0.0, &counting);
        assert!(!outcome.is_degraded());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn fixed_tagger_is_deterministic() {
        let tagger = fixed(TagCounts::new(4, 1, 2));
        let a = analyze_sentiment("anything", 0.2, &tagger);
        let b = analyze_sentiment("anything", 0.2, &tagger);
        assert_eq!(a, b);
    }
}
