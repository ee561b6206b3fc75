//! Analyze command: authenticity and sentiment for one review.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use veracity_core::{AnalysisReport, Analyzer, SentimentLabel};

use super::ReviewInput;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Review source.
    #[command(flatten)]
    pub input: ReviewInput,

    /// Exit non-zero when the review is judged potentially fake.
    #[arg(long)]
    pub strict: bool,
}

/// Analyze a review and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(source = %args.input.label()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    analyzer: &Analyzer,
    config_fail_on_fake: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let strict = args.strict || config_fail_on_fake;
    debug!(strict, "executing analyze command");

    let content = args.input.read(max_input_bytes)?;
    let report = analyzer.analyze(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(args.input.label(), &report);
    }

    if strict && report.is_fake() {
        bail!(
            "{} looks potentially fake (confidence {:.2}): {}",
            args.input.label(),
            report.authenticity.confidence,
            report.authenticity.reasons.join("; "),
        );
    }

    Ok(())
}

fn print_report(label: &str, report: &AnalysisReport) {
    let auth = &report.authenticity;
    println!("{}", label.bold());

    let verdict = if auth.is_fake {
        "POTENTIALLY FAKE".red().bold().to_string()
    } else {
        "LIKELY GENUINE".green().to_string()
    };
    println!(
        "\n  {} {} (confidence {:.2})",
        "Authenticity:".cyan(),
        verdict,
        auth.confidence,
    );
    for reason in &auth.reasons {
        println!("    - {reason}");
    }

    let s = &report.sentiment;
    let label = match s.label {
        SentimentLabel::VeryPositive | SentimentLabel::Positive => s.label.green().to_string(),
        SentimentLabel::Neutral => s.label.to_string(),
        SentimentLabel::Negative | SentimentLabel::VeryNegative => s.label.red().to_string(),
    };
    println!(
        "\n  {} {} (score {:+.2}, confidence {:.2})",
        "Sentiment:".cyan(),
        label,
        s.score,
        s.confidence,
    );

    let m = &report.metrics;
    println!(
        "\n  {} {} words, {} unique, avg length {:.1}, emotion {:.2}",
        "Metrics:".cyan(),
        m.word_count,
        m.unique_words,
        m.avg_word_length,
        m.emotion_intensity,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_args(text: &str, strict: bool) -> AnalyzeArgs {
        AnalyzeArgs {
            input: ReviewInput {
                file: None,
                text: Some(text.to_string()),
            },
            strict,
        }
    }

    #[test]
    fn genuine_review_passes_strict() {
        let args = text_args("I bought this kettle and it boils water quickly.", true);
        assert!(cmd_analyze(args, false, &Analyzer::new(), false, None).is_ok());
    }

    #[test]
    fn fake_review_fails_strict() {
        let args = text_args("Buy now! Love love love great best", true);
        let err = cmd_analyze(args, true, &Analyzer::new(), false, None).unwrap_err();
        assert!(err.to_string().contains("potentially fake"));
    }

    #[test]
    fn config_flag_enables_gate() {
        let args = text_args("Buy now! Love love love great best", false);
        assert!(cmd_analyze(args, false, &Analyzer::new(), true, None).is_err());
    }

    #[test]
    fn fake_review_passes_without_gate() {
        let args = text_args("Buy now! Love love love great best", false);
        assert!(cmd_analyze(args, false, &Analyzer::new(), false, None).is_ok());
    }
}
