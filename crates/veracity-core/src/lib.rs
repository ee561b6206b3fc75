//! Core library for veracity.
//!
//! Scores free-form review text for authenticity and sentiment, and explains
//! the authenticity verdict with human-readable reasons.
//!
//! # Modules
//!
//! - [`analyzer`] - The pipeline: metrics, then sentiment, then authenticity
//! - [`lexical`] - Word counts, vocabulary diversity, emotion intensity
//! - [`patterns`] - Case-insensitive vocabulary detectors
//! - [`sentiment`] - Sentiment scoring over a pluggable [`Tagger`]
//! - [`lexicon`] - The built-in word-list tagger
//! - [`authenticity`] - Weighted authenticity heuristics
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use veracity_core::analyze_review;
//!
//! let report = analyze_review("Click here for a limited time offer!");
//! assert!(!report.authenticity.reasons.is_empty());
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod authenticity;
pub mod config;
pub mod error;
pub mod lexical;
pub mod lexicon;
pub mod outcome;
pub mod patterns;
pub mod sentiment;
pub mod vocabulary;

pub use analyzer::{AnalysisReport, Analyzer, analyze_review};
pub use authenticity::{AuthenticityResult, Heuristic, assess_authenticity};
pub use config::{Config, ConfigLoader, LexiconConfig, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use lexical::{LexicalMetrics, extract_metrics};
pub use lexicon::LexiconTagger;
pub use outcome::Outcome;
pub use patterns::{Pattern, PatternMatcher, PatternReport};
pub use sentiment::{SentimentLabel, SentimentResult, TagCounts, Tagger, analyze_sentiment};
pub use vocabulary::Vocabulary;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
