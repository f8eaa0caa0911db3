//! Analyze command — score a message and list its issues.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use tactful_core::{Lexicon, ScoreBand, Severity, analyze_with};

use super::InputArgs;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Message to analyze.
    #[command(flatten)]
    pub input: InputArgs,

    /// Minimum acceptable respectfulness score (0–100).
    #[arg(long)]
    pub min_score: Option<i32>,

    /// Minimum acceptable mental-health score (0–100).
    #[arg(long)]
    pub min_mental_health: Option<i32>,
}

fn paint_score(score: i32) -> String {
    let text = format!("{score}%");
    match ScoreBand::of(score) {
        ScoreBand::Good => text.green().to_string(),
        ScoreBand::Fair => text.yellow().to_string(),
        ScoreBand::Poor => text.red().to_string(),
    }
}

fn paint_severity(severity: Severity) -> String {
    match severity {
        Severity::High => severity.red().to_string(),
        Severity::Medium => severity.yellow().to_string(),
        Severity::Low => severity.dimmed().to_string(),
    }
}

/// Analyze a message and print scores, issues, tips and notes.
#[instrument(name = "cmd_analyze", skip_all, fields(input = %args.input.label()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_score: Option<i32>,
    config_min_mental_health: Option<i32>,
    lexicon: &Lexicon,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, "executing analyze command");

    let content = args.input.read(max_input)?;
    let label = args.input.label();
    let min_score = args.min_score.or(config_min_score);
    let min_mental_health = args.min_mental_health.or(config_min_mental_health);

    let report = analyze_with(&content, lexicon);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let Some(report) = report else {
        if !global_json {
            println!("{}", "Nothing to analyze.".dimmed());
        }
        return Ok(());
    };

    if !global_json {
        println!("{}", label.bold());
        println!(
            "\n  {} {}   {} {}",
            "Respectfulness:".cyan(),
            paint_score(report.score),
            "Mental health:".cyan(),
            paint_score(report.mental_health_score),
        );

        if !report.issues.is_empty() {
            println!("\n  {}", "Issues:".yellow());
            for issue in &report.issues {
                let suggestion = if issue.suggested_replacement.is_empty() {
                    "remove it".italic().to_string()
                } else {
                    format!("\"{}\"", issue.suggested_replacement)
                };
                println!(
                    "    [{}] {} \"{}\" → {}",
                    paint_severity(issue.severity),
                    issue.category,
                    issue.matched_text.bold(),
                    suggestion,
                );
            }
        }

        if !report.tips.is_empty() {
            println!("\n  {}", "Tips:".cyan());
            for tip in &report.tips {
                println!("    • {tip}");
            }
        }

        if !report.positive_notes.is_empty() {
            println!("\n  {}", "Try adding:".cyan());
            for note in &report.positive_notes {
                println!("    • {note}");
            }
        }

        if report.needs_supportive_version() {
            println!(
                "\n  {}",
                "Run `tactful rewrite` for a more supportive version.".dimmed()
            );
        }
    }

    if let Some(min) = min_score
        && report.score < min
    {
        bail!(
            "{label} respectfulness score {} is below minimum {min}",
            report.score
        );
    }
    if let Some(min) = min_mental_health
        && report.mental_health_score < min
    {
        bail!(
            "{label} mental-health score {} is below minimum {min}",
            report.mental_health_score
        );
    }

    Ok(())
}
