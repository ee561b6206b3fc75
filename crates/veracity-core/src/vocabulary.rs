//! Fixed vocabulary tables consulted by the pattern matcher.
//!
//! The tables are compile-time constants. A [`Vocabulary`] bundles one slice
//! per detector and is handed to [`PatternMatcher::new`](crate::PatternMatcher::new),
//! so callers (and tests) can substitute their own tables without touching
//! global state.

/// Promotional or spam-like phrasing.
pub const PROMOTIONAL_PHRASES: &[&str] = &["click here", "buy now", "discount", "offer", "limited time"];

/// Emotionally charged vocabulary.
pub const EMOTIONAL_WORDS: &[&str] = &[
    "love",
    "hate",
    "terrible",
    "excellent",
    "awful",
    "great",
    "bad",
    "good",
    "worst",
    "best",
];

/// First-person pronouns that signal a personal perspective.
pub const PERSONAL_PRONOUNS: &[&str] = &["I", "me", "my", "mine", "we", "our", "ours"];

/// Superlatives common in fabricated reviews.
///
/// Detected and reported, but not weighed by the authenticity scorer.
pub const FAKE_TELLS: &[&str] = &[
    "amazing",
    "incredible",
    "awesome",
    "fantastic",
    "perfect",
    "best ever",
];

/// The vocabulary tables injected into a [`PatternMatcher`](crate::PatternMatcher).
///
/// Entries are matched literally and case-insensitively; they are not
/// anchored to word boundaries, so `"good"` also matches inside `"goodness"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    /// Promotional phrases.
    pub promotional: &'static [&'static str],
    /// Emotional words.
    pub emotional: &'static [&'static str],
    /// Personal pronouns.
    pub pronouns: &'static [&'static str],
    /// Common fake-review superlatives.
    pub fake_tells: &'static [&'static str],
}

impl Vocabulary {
    /// The standard tables.
    pub const STANDARD: Self = Self {
        promotional: PROMOTIONAL_PHRASES,
        emotional: EMOTIONAL_WORDS,
        pronouns: PERSONAL_PRONOUNS,
        fake_tells: FAKE_TELLS,
    };
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_have_expected_sizes() {
        let v = Vocabulary::default();
        assert_eq!(v.promotional.len(), 5);
        assert_eq!(v.emotional.len(), 10);
        assert_eq!(v.pronouns.len(), 7);
        assert_eq!(v.fake_tells.len(), 6);
    }

    #[test]
    fn multi_word_entries_are_kept_whole() {
        assert!(PROMOTIONAL_PHRASES.contains(&"limited time"));
        assert!(FAKE_TELLS.contains(&"best ever"));
    }
}
