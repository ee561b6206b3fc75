//! Authenticity scoring.
//!
//! Four heuristics run in a fixed order, each adding its weight to a fake
//! score and its reason to the report when triggered:
//!
//! | Heuristic                   | Condition                                   | Weight |
//! |-----------------------------|---------------------------------------------|--------|
//! | Promotional content         | any promotional phrase                      | 0.30   |
//! | Lacks personal perspective  | no pronouns and more than 30 words          | 0.20   |
//! | Limited vocabulary          | unique / total < 0.4                        | 0.15   |
//! | High emotional content      | emotional matches / total > 0.3             | 0.25   |
//!
//! The verdict is fake when the score exceeds 0.5. Confidence is the score
//! plus a fixed 0.3 base, capped at 1.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexical::LexicalMetrics;
use crate::patterns::{Pattern, PatternMatcher};

const FAKE_THRESHOLD: f64 = 0.5;
const CONFIDENCE_BASE: f64 = 0.3;
const MIN_WORDS_FOR_PERSPECTIVE: usize = 30;
const MIN_DIVERSITY: f64 = 0.4;
const MAX_EMOTIONAL_DENSITY: f64 = 0.3;

/// One authenticity heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Promotional or spam phrasing is present.
    PromotionalContent,
    /// A longer review never speaks in the first person.
    LacksPersonalPerspective,
    /// Too few distinct words.
    LimitedVocabulary,
    /// Too many emotional words per word.
    HighEmotionalContent,
}

impl Heuristic {
    /// Evaluation order, which is also reason order.
    pub const ORDER: [Self; 4] = [
        Self::PromotionalContent,
        Self::LacksPersonalPerspective,
        Self::LimitedVocabulary,
        Self::HighEmotionalContent,
    ];

    /// Amount added to the fake score when triggered.
    pub const fn weight(self) -> f64 {
        match self {
            Self::PromotionalContent => 0.3,
            Self::LacksPersonalPerspective => 0.2,
            Self::LimitedVocabulary => 0.15,
            Self::HighEmotionalContent => 0.25,
        }
    }

    /// Reason reported when triggered.
    pub const fn reason(self) -> &'static str {
        match self {
            Self::PromotionalContent => "Contains promotional or spam-like content",
            Self::LacksPersonalPerspective => "Lacks personal perspective",
            Self::LimitedVocabulary => "Limited vocabulary diversity",
            Self::HighEmotionalContent => "Unusually high emotional content",
        }
    }

    fn triggered(self, text: &str, metrics: &LexicalMetrics, matcher: &PatternMatcher) -> bool {
        match self {
            Self::PromotionalContent => matcher.is_match(Pattern::Promotional, text),
            Self::LacksPersonalPerspective => {
                metrics.word_count > MIN_WORDS_FOR_PERSPECTIVE
                    && matcher.count(Pattern::PersonalPronouns, text) == 0
            }
            Self::LimitedVocabulary => metrics
                .vocabulary_diversity()
                .is_some_and(|diversity| diversity < MIN_DIVERSITY),
            Self::HighEmotionalContent => {
                metrics.word_count > 0
                    && matcher.count(Pattern::Emotional, text) as f64 / metrics.word_count as f64
                        > MAX_EMOTIONAL_DENSITY
            }
        }
    }
}

/// Authenticity verdict for one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityResult {
    /// Whether the review is potentially fake.
    pub is_fake: bool,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Reasons for each triggered heuristic, in evaluation order.
    pub reasons: Vec<String>,
}

/// Run the heuristics over `text` and its metrics.
#[tracing::instrument(skip_all, fields(word_count = metrics.word_count))]
pub fn assess_authenticity(
    text: &str,
    metrics: &LexicalMetrics,
    matcher: &PatternMatcher,
) -> AuthenticityResult {
    let mut fake_score = 0.0;
    let mut reasons = Vec::new();

    for heuristic in Heuristic::ORDER {
        if heuristic.triggered(text, metrics, matcher) {
            debug!(?heuristic, weight = heuristic.weight(), "heuristic triggered");
            fake_score += heuristic.weight();
            reasons.push(heuristic.reason().to_string());
        }
    }

    AuthenticityResult {
        is_fake: fake_score > FAKE_THRESHOLD,
        confidence: (fake_score + CONFIDENCE_BASE).clamp(0.0, 1.0),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::extract_metrics;

    fn assess(text: &str) -> AuthenticityResult {
        let matcher = PatternMatcher::standard();
        let metrics = extract_metrics(text, matcher);
        assess_authenticity(text, &metrics, matcher)
    }

    /// Distinct words containing no pronoun substrings.
    const PLAIN_WORDS: [&str; 31] = [
        "cat", "dog", "sun", "hat", "box", "pen", "cup", "bag", "car", "bus", "red", "tan", "top",
        "log", "jug", "fan", "net", "pot", "rug", "tub", "van", "yak", "zoo", "ant", "bed", "cab",
        "den", "elk", "fox", "gum", "hut",
    ];

    #[test]
    fn empty_text_is_authentic_without_reasons() {
        let r = assess("");
        assert!(!r.is_fake);
        assert!(r.reasons.is_empty());
        assert!((r.confidence - 0.3).abs() < 1e-12);
    }

    #[test]
    fn plain_review_triggers_nothing() {
        let r = assess("I bought this kettle last month and it boils water quickly.");
        assert!(!r.is_fake);
        assert!(r.reasons.is_empty());
    }

    #[test]
    fn promotional_phrase_alone_is_not_enough() {
        let r = assess("BUY NOW!!! This is the best ever, I love it, click here for discount");
        assert_eq!(r.reasons, vec![Heuristic::PromotionalContent.reason()]);
        assert!(!r.is_fake);
        assert!((r.confidence - 0.6).abs() < 1e-12);
    }

    #[test]
    fn promotional_plus_emotional_is_fake() {
        let r = assess("Buy now! Love love love great best");
        assert_eq!(
            r.reasons,
            vec![
                Heuristic::PromotionalContent.reason(),
                Heuristic::HighEmotionalContent.reason(),
            ]
        );
        assert!(r.is_fake);
        assert!((r.confidence - 0.85).abs() < 1e-12);
    }

    #[test]
    fn exactly_half_is_not_fake() {
        // promotional 0.3 + perspective 0.2 == 0.5, which is not above 0.5
        let text = format!("{} offer", PLAIN_WORDS.join(" "));
        let r = assess(&text);
        assert_eq!(r.reasons.len(), 2);
        assert!(!r.is_fake);
    }

    #[test]
    fn perspective_boundary_at_thirty_words() {
        let long = PLAIN_WORDS.join(" ");
        let r = assess(&long);
        assert_eq!(r.reasons, vec![Heuristic::LacksPersonalPerspective.reason()]);
        assert!((r.confidence - 0.5).abs() < 1e-12);

        let short = PLAIN_WORDS[..30].join(" ");
        assert!(assess(&short).reasons.is_empty());
    }

    #[test]
    fn pronoun_exempts_long_review() {
        let text = format!("{} me", PLAIN_WORDS.join(" "));
        assert!(assess(&text).reasons.is_empty());
    }

    #[test]
    fn diversity_boundary_is_strict() {
        // 2 / 5 == 0.4 does not trigger
        let r = assess("cat cat cat dog dog");
        assert!(r.reasons.is_empty());

        // 2 / 6 < 0.4 triggers
        let r = assess("cat cat cat cat dog dog");
        assert_eq!(r.reasons, vec![Heuristic::LimitedVocabulary.reason()]);
    }

    #[test]
    fn diversity_just_below_boundary_triggers() {
        // 39 unique in 100 words
        let mut words: Vec<String> = (0..39).map(|n| format!("w{n}")).collect();
        words.extend(std::iter::repeat_n("w0".to_string(), 61));
        let r = assess(&words.join(" "));
        assert!(r.reasons.contains(&Heuristic::LimitedVocabulary.reason().to_string()));

        // 40 unique in 100 words
        let mut words: Vec<String> = (0..40).map(|n| format!("w{n}")).collect();
        words.extend(std::iter::repeat_n("w0".to_string(), 60));
        let r = assess(&words.join(" "));
        assert!(!r.reasons.contains(&Heuristic::LimitedVocabulary.reason().to_string()));
    }

    #[test]
    fn emotional_density_counts_substrings() {
        // "goodness" and "lovely" both count: 2 / 4 > 0.3
        let r = assess("goodness, lovely little tea");
        assert_eq!(r.reasons, vec![Heuristic::HighEmotionalContent.reason()]);
    }

    #[test]
    fn fake_tells_are_not_weighed() {
        let r = assess("amazing incredible awesome fantastic perfect");
        assert!(r.reasons.is_empty());
        assert!(!r.is_fake);
    }

    #[test]
    fn every_heuristic_fires_in_order() {
        let mut words = vec!["offer"; 2];
        words.extend(["bad"; 30]);
        let r = assess(&words.join(" "));
        let expected: Vec<String> = Heuristic::ORDER
            .iter()
            .map(|h| h.reason().to_string())
            .collect();
        assert_eq!(r.reasons, expected);
        assert!(r.is_fake);
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn reasons_never_repeat() {
        let r = assess("click here click here buy now offer offer discount");
        assert_eq!(r.reasons.len(), 1);
    }
}
