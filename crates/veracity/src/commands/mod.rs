//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use veracity_core::{Analyzer, Config, LexiconTagger};

pub mod analyze;
pub mod info;
pub mod patterns;
#[cfg(feature = "mcp")]
pub mod serve;

/// Where a command reads its review from.
#[derive(Args, Debug, Default, Clone)]
pub struct ReviewInput {
    /// File containing the review (`-` or omitted reads stdin).
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Review text given inline.
    #[arg(short, long)]
    pub text: Option<String>,
}

impl ReviewInput {
    /// Short description of the source for logs and messages.
    pub fn label(&self) -> &str {
        match (&self.text, &self.file) {
            (Some(_), _) => "<text>",
            (None, Some(path)) if path.as_str() != "-" => path.as_str(),
            _ => "<stdin>",
        }
    }

    /// Read the review, enforcing `max_bytes` whatever the source.
    pub fn read(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            check_size("<text>", text.len(), max_bytes)?;
            return Ok(text.clone());
        }
        match self.file {
            Some(ref path) if path.as_str() != "-" => read_input_file(path, max_bytes),
            _ => read_stdin(max_bytes),
        }
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight via metadata so oversized files are never read into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    check_size(path.as_str(), metadata.len() as usize, max_bytes)?;

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), "<stdin>", max_bytes)
}

/// Read a stream to the end, stopping one byte past `max_bytes`.
fn read_limited(
    reader: impl Read,
    label: &str,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            // One byte past the limit is enough to know it was exceeded.
            reader
                .take((max as u64).saturating_add(1))
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {label}"))?;
            check_size(label, content.len(), Some(max))?;
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {label}"))?;
        }
    }
    Ok(content)
}

fn check_size(label: &str, size: usize, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

/// Build an analyzer, extending the tagger lexicon from config when set.
pub fn analyzer_for(config: &Config) -> anyhow::Result<Analyzer> {
    match config.lexicon {
        Some(ref lexicon) if !lexicon.is_empty() => {
            let lexicon = lexicon.resolve().context("failed to load lexicon")?;
            Ok(Analyzer::new().with_tagger(LexiconTagger::from_config(&lexicon)))
        }
        _ => Ok(Analyzer::new()),
    }
}
