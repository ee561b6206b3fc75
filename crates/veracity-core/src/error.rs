//! Error types for veracity-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A lexicon file named by the configuration could not be read.
    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFile {
        /// The path that was read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while scoring a review.
///
/// None of these cross [`Analyzer::analyze`](crate::Analyzer::analyze): the
/// orchestrator downgrades them into a degraded report.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The tagging capability failed to produce counts.
    #[error("tagger failed: {0}")]
    Tagger(String),

    /// A vocabulary table could not be compiled into a pattern.
    #[error("invalid pattern for {name}: {source}")]
    InvalidPattern {
        /// Name of the detector whose pattern failed.
        name: &'static str,
        /// The regex compilation error.
        source: regex::Error,
    },

    /// A computed value escaped its documented range.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Report field that failed validation.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
