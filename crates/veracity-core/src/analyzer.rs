//! Review analysis pipeline.
//!
//! [`Analyzer::analyze`] runs lexical metrics, then sentiment, then
//! authenticity, and merges the three into an [`AnalysisReport`]. It never
//! fails: a tagger fault degrades only the sentiment section, and any other
//! fault (including a panicking tagger) yields [`AnalysisReport::error`].
//!
//! The analyzer holds no per-call state, so one instance can serve concurrent
//! callers.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::authenticity::{self, AuthenticityResult};
use crate::error::{AnalysisError, AnalysisResult};
use crate::lexical::{self, LexicalMetrics};
use crate::lexicon::LexiconTagger;
use crate::outcome::Outcome;
use crate::patterns::PatternMatcher;
use crate::sentiment::{self, SentimentResult, Tagger};
use crate::vocabulary::Vocabulary;

/// Reason reported by [`AnalysisReport::error`].
pub const ERROR_REASON: &str = "Error processing review";

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::new);

/// Full result for one review.
///
/// Serializes with the authenticity fields at the top level:
/// `isFake`, `confidence`, `reasons`, `sentiment`, `metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Authenticity verdict.
    #[serde(flatten)]
    pub authenticity: AuthenticityResult,
    /// Sentiment estimate.
    pub sentiment: SentimentResult,
    /// Lexical metrics.
    pub metrics: LexicalMetrics,
}

impl AnalysisReport {
    /// The fixed report returned when the pipeline faults.
    pub fn error() -> Self {
        Self {
            authenticity: AuthenticityResult {
                is_fake: false,
                confidence: 0.0,
                reasons: vec![ERROR_REASON.to_string()],
            },
            sentiment: SentimentResult::NEUTRAL,
            metrics: LexicalMetrics::default(),
        }
    }

    /// Shorthand for `authenticity.is_fake`.
    pub const fn is_fake(&self) -> bool {
        self.authenticity.is_fake
    }

    /// Check every bounded field.
    fn validate(&self) -> AnalysisResult<()> {
        check_range("confidence", self.authenticity.confidence, 0.0, 1.0)?;
        check_range("sentiment.score", self.sentiment.score, -1.0, 1.0)?;
        check_range("sentiment.confidence", self.sentiment.confidence, 0.0, 1.0)?;
        check_range(
            "metrics.emotionIntensity",
            self.metrics.emotion_intensity,
            0.0,
            1.0,
        )?;
        check_range(
            "metrics.avgWordLength",
            self.metrics.avg_word_length,
            0.0,
            f64::MAX,
        )
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> AnalysisResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AnalysisError::OutOfRange { field, value })
    }
}

/// Scores reviews with an injected vocabulary and tagger.
pub struct Analyzer {
    matcher: PatternMatcher,
    tagger: Box<dyn Tagger>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Standard vocabulary with the built-in [`LexiconTagger`].
    pub fn new() -> Self {
        Self {
            matcher: PatternMatcher::standard().clone(),
            tagger: Box::new(LexiconTagger::default()),
        }
    }

    /// Replace the vocabulary tables.
    pub fn with_vocabulary(mut self, vocabulary: &Vocabulary) -> AnalysisResult<Self> {
        self.matcher = PatternMatcher::new(vocabulary)?;
        Ok(self)
    }

    /// Replace the tagging capability.
    pub fn with_tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.tagger = Box::new(tagger);
        self
    }

    /// The pattern matcher in use.
    pub const fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    /// Analyze `text`, reporting whether any stage degraded.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn assess(&self, text: &str) -> Outcome<AnalysisReport> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.run(text))) {
            Ok(Ok(outcome)) => {
                let report = outcome.value();
                debug!(
                    is_fake = report.authenticity.is_fake,
                    reasons = report.authenticity.reasons.len(),
                    sentiment = %report.sentiment.label,
                    degraded = outcome.is_degraded(),
                    "review analyzed"
                );
                outcome
            }
            Ok(Err(err)) => {
                warn!(error = %err, "analysis failed; returning error report");
                Outcome::Degraded {
                    value: AnalysisReport::error(),
                    cause: err.to_string(),
                }
            }
            Err(payload) => {
                let cause = panic_message(payload.as_ref());
                warn!(%cause, "analysis panicked; returning error report");
                Outcome::Degraded {
                    value: AnalysisReport::error(),
                    cause,
                }
            }
        }
    }

    /// Analyze `text`. Always returns a well-formed report.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        self.assess(text).into_inner()
    }

    fn run(&self, text: &str) -> AnalysisResult<Outcome<AnalysisReport>> {
        let metrics = lexical::extract_metrics(text, &self.matcher);
        let (sentiment, cause) =
            sentiment::analyze_sentiment(text, metrics.emotion_intensity, self.tagger.as_ref())
                .into_parts();
        let authenticity = authenticity::assess_authenticity(text, &metrics, &self.matcher);

        let report = AnalysisReport {
            authenticity,
            sentiment,
            metrics,
        };
        report.validate()?;

        Ok(match cause {
            None => Outcome::Complete(report),
            Some(cause) => Outcome::Degraded {
                value: report,
                cause,
            },
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Analyze `text` with the standard vocabulary and built-in tagger.
pub fn analyze_review(text: &str) -> AnalysisReport {
    DEFAULT_ANALYZER.analyze(text)
}
