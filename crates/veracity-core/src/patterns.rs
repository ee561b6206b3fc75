//! Named pattern detectors.
//!
//! Each detector is a compiled [`Regex`]. Vocabulary detectors are built from
//! an injected [`Vocabulary`] as an ASCII case-insensitive alternation of
//! escaped literals; the structural detectors (capital runs, repeated punctuation) are
//! fixed.
//!
//! Counts are non-overlapping, leftmost-first matches, so an alternation
//! prefers earlier entries at the same position.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::vocabulary::Vocabulary;

/// Three or more consecutive ASCII capitals.
const EXCESSIVE_CAPITALS: &str = r"[A-Z]{3,}";

/// Two or more consecutive ASCII capitals (used for emotion intensity).
const CAPITAL_RUNS: &str = r"[A-Z]{2,}";

/// Two or more consecutive `!`, `?` or `.` characters.
const REPEATED_PUNCTUATION: &str = r"[!?.]{2,}";

/// Never matches; stands in for an empty vocabulary table.
const NEVER: &str = r"\b\B";

static STANDARD: LazyLock<PatternMatcher> = LazyLock::new(|| {
    PatternMatcher::new(&Vocabulary::STANDARD).expect("standard vocabulary compiles")
});

/// A named detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Pattern {
    /// Runs of three or more capital letters.
    ExcessiveCapitals,
    /// Runs of two or more capital letters.
    CapitalRuns,
    /// Repeated `!`, `?` or `.`.
    RepeatedPunctuation,
    /// Promotional or spam phrasing.
    Promotional,
    /// Emotionally charged vocabulary.
    Emotional,
    /// First-person pronouns.
    PersonalPronouns,
    /// Superlatives common in fabricated reviews.
    FakeTells,
}

impl Pattern {
    /// Every detector, in report order.
    pub const ALL: [Self; 7] = [
        Self::ExcessiveCapitals,
        Self::CapitalRuns,
        Self::RepeatedPunctuation,
        Self::Promotional,
        Self::Emotional,
        Self::PersonalPronouns,
        Self::FakeTells,
    ];

    /// Returns the detector name in kebab-case.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExcessiveCapitals => "excessive-capitals",
            Self::CapitalRuns => "capital-runs",
            Self::RepeatedPunctuation => "repeated-punctuation",
            Self::Promotional => "promotional",
            Self::Emotional => "emotional",
            Self::PersonalPronouns => "personal-pronouns",
            Self::FakeTells => "fake-tells",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hit counts for every detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatternReport {
    /// Runs of three or more capitals.
    pub excessive_capitals: usize,
    /// Runs of two or more capitals.
    pub capital_runs: usize,
    /// Repeated punctuation runs.
    pub repeated_punctuation: usize,
    /// Promotional phrase matches.
    pub promotional: usize,
    /// Emotional word matches.
    pub emotional: usize,
    /// Personal pronoun matches.
    pub personal_pronouns: usize,
    /// Fake-tell matches.
    pub fake_tells: usize,
}

impl PatternReport {
    /// Count for a single detector.
    pub const fn get(&self, pattern: Pattern) -> usize {
        match pattern {
            Pattern::ExcessiveCapitals => self.excessive_capitals,
            Pattern::CapitalRuns => self.capital_runs,
            Pattern::RepeatedPunctuation => self.repeated_punctuation,
            Pattern::Promotional => self.promotional,
            Pattern::Emotional => self.emotional,
            Pattern::PersonalPronouns => self.personal_pronouns,
            Pattern::FakeTells => self.fake_tells,
        }
    }
}

/// Compiled detectors over one [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    excessive_capitals: Regex,
    capital_runs: Regex,
    repeated_punctuation: Regex,
    promotional: Regex,
    emotional: Regex,
    personal_pronouns: Regex,
    fake_tells: Regex,
}

impl PatternMatcher {
    /// Compile the detectors for `vocabulary`.
    pub fn new(vocabulary: &Vocabulary) -> AnalysisResult<Self> {
        Ok(Self {
            excessive_capitals: compile(Pattern::ExcessiveCapitals, EXCESSIVE_CAPITALS)?,
            capital_runs: compile(Pattern::CapitalRuns, CAPITAL_RUNS)?,
            repeated_punctuation: compile(Pattern::RepeatedPunctuation, REPEATED_PUNCTUATION)?,
            promotional: alternation(Pattern::Promotional, vocabulary.promotional)?,
            emotional: alternation(Pattern::Emotional, vocabulary.emotional)?,
            personal_pronouns: alternation(Pattern::PersonalPronouns, vocabulary.pronouns)?,
            fake_tells: alternation(Pattern::FakeTells, vocabulary.fake_tells)?,
        })
    }

    /// The shared matcher over [`Vocabulary::STANDARD`].
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    const fn regex(&self, pattern: Pattern) -> &Regex {
        match pattern {
            Pattern::ExcessiveCapitals => &self.excessive_capitals,
            Pattern::CapitalRuns => &self.capital_runs,
            Pattern::RepeatedPunctuation => &self.repeated_punctuation,
            Pattern::Promotional => &self.promotional,
            Pattern::Emotional => &self.emotional,
            Pattern::PersonalPronouns => &self.personal_pronouns,
            Pattern::FakeTells => &self.fake_tells,
        }
    }

    /// Number of non-overlapping matches of `pattern` in `text`.
    pub fn count(&self, pattern: Pattern, text: &str) -> usize {
        self.regex(pattern).find_iter(text).count()
    }

    /// Whether `pattern` matches anywhere in `text`.
    pub fn is_match(&self, pattern: Pattern, text: &str) -> bool {
        self.regex(pattern).is_match(text)
    }

    /// Run every detector over `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn scan(&self, text: &str) -> PatternReport {
        PatternReport {
            excessive_capitals: self.count(Pattern::ExcessiveCapitals, text),
            capital_runs: self.count(Pattern::CapitalRuns, text),
            repeated_punctuation: self.count(Pattern::RepeatedPunctuation, text),
            promotional: self.count(Pattern::Promotional, text),
            emotional: self.count(Pattern::Emotional, text),
            personal_pronouns: self.count(Pattern::PersonalPronouns, text),
            fake_tells: self.count(Pattern::FakeTells, text),
        }
    }
}

fn compile(pattern: Pattern, source: &str) -> AnalysisResult<Regex> {
    Regex::new(source).map_err(|source| AnalysisError::InvalidPattern {
        name: pattern.as_str(),
        source,
    })
}

/// Build `(?i-u:a|b|c)` from literal entries, preserving table order.
///
/// Case folding is ASCII only, so the Kelvin sign never stands in for `k`.
fn alternation(pattern: Pattern, entries: &[&str]) -> AnalysisResult<Regex> {
    if entries.is_empty() {
        return compile(pattern, NEVER);
    }
    let body = entries
        .iter()
        .map(|entry| regex::escape(entry))
        .collect::<Vec<_>>()
        .join("|");
    compile(pattern, &format!("(?i-u:{body})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> &'static PatternMatcher {
        PatternMatcher::standard()
    }

    #[test]
    fn promotional_is_case_insensitive() {
        assert!(matcher().is_match(Pattern::Promotional, "CLICK HERE now"));
        assert!(matcher().is_match(Pattern::Promotional, "Limited Time only"));
        assert!(!matcher().is_match(Pattern::Promotional, "A plain review."));
    }

    #[test]
    fn case_folding_is_ascii_only() {
        assert!(!matcher().is_match(Pattern::Promotional, "clic\u{212A} here"));
        assert_eq!(matcher().count(Pattern::Emotional, "wor\u{17F}t"), 0);
        assert_eq!(matcher().count(Pattern::Emotional, "WORST"), 1);
    }

    #[test]
    fn emotional_matches_inside_words() {
        // "goodness" contains "good", "lovely" contains "love"
        assert_eq!(matcher().count(Pattern::Emotional, "goodness, lovely"), 2);
    }

    #[test]
    fn pronouns_match_as_substrings() {
        // Every "i" counts: "this" and "is" each carry one.
        assert_eq!(matcher().count(Pattern::PersonalPronouns, "this is"), 2);
        assert_eq!(matcher().count(Pattern::PersonalPronouns, "the cat sat"), 0);
    }

    #[test]
    fn earlier_alternatives_win_at_same_position() {
        // "mine" is tried after "me" and "my" but both fail at "mi", so
        // the whole word matches once.
        assert_eq!(matcher().count(Pattern::PersonalPronouns, "MNE mine"), 1);
    }

    #[test]
    fn capital_thresholds_differ() {
        let text = "OK then, WOW";
        assert_eq!(matcher().count(Pattern::CapitalRuns, text), 2);
        assert_eq!(matcher().count(Pattern::ExcessiveCapitals, text), 1);
    }

    #[test]
    fn repeated_punctuation_runs() {
        assert_eq!(
            matcher().count(Pattern::RepeatedPunctuation, "Wow!!! Really?! Fine."),
            2
        );
    }

    #[test]
    fn fake_tells_detected() {
        let report = matcher().scan("Amazing product, best ever, simply perfect!");
        assert_eq!(report.fake_tells, 3);
    }

    #[test]
    fn scan_reports_every_detector() {
        let report = matcher().scan("BUY NOW!!! I love it, click here");
        for pattern in Pattern::ALL {
            let direct = matcher().count(pattern, "BUY NOW!!! I love it, click here");
            assert_eq!(report.get(pattern), direct, "mismatch for {pattern}");
        }
        assert_eq!(report.promotional, 2);
    }

    #[test]
    fn empty_table_never_matches() {
        let vocabulary = Vocabulary {
            promotional: &[],
            ..Vocabulary::STANDARD
        };
        let m = PatternMatcher::new(&vocabulary).unwrap();
        assert_eq!(m.count(Pattern::Promotional, "buy now, click here"), 0);
        assert!(!m.is_match(Pattern::Promotional, ""));
    }

    #[test]
    fn entries_are_escaped() {
        let vocabulary = Vocabulary {
            promotional: &["50% off!", "a.b"],
            ..Vocabulary::STANDARD
        };
        let m = PatternMatcher::new(&vocabulary).unwrap();
        assert!(m.is_match(Pattern::Promotional, "now 50% OFF!"));
        assert!(!m.is_match(Pattern::Promotional, "axb"));
    }

    #[test]
    fn pattern_names_are_kebab_case() {
        assert_eq!(Pattern::PersonalPronouns.to_string(), "personal-pronouns");
        let json = serde_json::to_string(&Pattern::FakeTells).unwrap();
        assert_eq!(json, "\"fake-tells\"");
    }
}
