//! Lexicon command — list trigger terms and their replacements.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tactful_core::{Category, Lexicon, LexiconEntry, Matcher, Severity};

/// Arguments for the `lexicon` subcommand.
#[derive(Args, Debug, Default)]
pub struct LexiconArgs {
    /// Only list this category.
    #[arg(long, value_enum)]
    pub category: Option<Category>,
}

#[derive(Serialize)]
struct EntryInfo<'a> {
    category: Category,
    kind: &'static str,
    trigger: &'a str,
    replacement: &'a str,
    severity: Severity,
    score_penalty: i32,
    mental_health_penalty: i32,
}

impl<'a> EntryInfo<'a> {
    fn new(entry: &'a LexiconEntry) -> Self {
        let kind = match entry.matcher() {
            Matcher::Literal(_) => "term",
            Matcher::Pattern(_) => "pattern",
        };
        let penalty = entry.penalty();
        Self {
            category: entry.category(),
            kind,
            trigger: entry.matcher().as_str(),
            replacement: entry.replacement(),
            severity: entry.severity(),
            score_penalty: penalty.score,
            mental_health_penalty: penalty.mental_health,
        }
    }
}

/// Print lexicon entries grouped by category in scan order.
#[instrument(name = "cmd_lexicon", skip_all)]
pub fn cmd_lexicon(args: LexiconArgs, global_json: bool, lexicon: &Lexicon) -> anyhow::Result<()> {
    debug!(category = ?args.category, "executing lexicon command");

    let categories: Vec<Category> = args
        .category
        .map_or_else(|| Category::SCAN_ORDER.to_vec(), |c| vec![c]);

    if global_json {
        let entries: Vec<EntryInfo<'_>> = categories
            .iter()
            .flat_map(|&c| lexicon.entries_for_category(c))
            .map(EntryInfo::new)
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for category in categories {
        let penalty = category.penalty();
        println!(
            "{} ({}, -{} / -{})",
            category.bold(),
            category.severity(),
            penalty.score,
            penalty.mental_health,
        );
        for entry in lexicon.entries_for_category(category) {
            let replacement = if entry.replacement().is_empty() {
                "(remove)".dimmed().to_string()
            } else {
                entry.replacement().to_string()
            };
            println!("  {:<28} → {}", entry.matcher().as_str(), replacement);
        }
    }

    Ok(())
}
