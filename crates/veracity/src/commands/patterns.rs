//! Patterns command: raw detector hit counts.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use veracity_core::{Pattern, PatternMatcher};

use super::ReviewInput;

/// Arguments for the `patterns` subcommand.
#[derive(Args, Debug, Default)]
pub struct PatternsArgs {
    /// Review source.
    #[command(flatten)]
    pub input: ReviewInput,

    /// Detectors to report (comma-separated). Omit for all.
    #[arg(long, value_delimiter = ',', value_enum)]
    pub only: Option<Vec<Pattern>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct PatternHit {
    pattern: Pattern,
    count: usize,
}

fn collect_hits(matcher: &PatternMatcher, text: &str, only: Option<&[Pattern]>) -> Vec<PatternHit> {
    let report = matcher.scan(text);
    Pattern::ALL
        .into_iter()
        .filter(|p| only.is_none_or(|selected| selected.contains(p)))
        .map(|pattern| PatternHit {
            pattern,
            count: report.get(pattern),
        })
        .collect()
}

/// Print how often each detector matches a review.
#[instrument(name = "cmd_patterns", skip_all, fields(source = %args.input.label()))]
pub fn cmd_patterns(
    args: PatternsArgs,
    global_json: bool,
    matcher: &PatternMatcher,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(only = ?args.only, "executing patterns command");

    let content = args.input.read(max_input_bytes)?;
    let hits = collect_hits(matcher, &content, args.only.as_deref());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!("{}", args.input.label().bold());
    for hit in &hits {
        let count = if hit.count > 0 {
            hit.count.yellow().to_string()
        } else {
            hit.count.dimmed().to_string()
        };
        println!("  {:<22} {}", hit.pattern.as_str(), count);
    }

    Ok(())
}
