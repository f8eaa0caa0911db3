//! Rewrite command — supportive version or a single replacement.

use anyhow::bail;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use tactful_core::{Lexicon, apply_single_replacement, generate_supportive_version_with};

use super::InputArgs;

/// Arguments for the `rewrite` subcommand.
#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Message to rewrite.
    #[command(flatten)]
    pub input: InputArgs,

    /// Replace only this term (case-insensitive, literal) instead of rewriting everything.
    #[arg(long, requires = "replacement")]
    pub term: Option<String>,

    /// Replacement for `--term`. Empty deletes the term.
    #[arg(long, requires = "term", allow_hyphen_values = true)]
    pub replacement: Option<String>,
}

#[derive(Serialize)]
struct RewriteOutput<'a> {
    original: &'a str,
    rewritten: &'a str,
    changed: bool,
}

/// Rewrite a message and print the result.
#[instrument(name = "cmd_rewrite", skip_all, fields(input = %args.input.label()))]
pub fn cmd_rewrite(
    args: RewriteArgs,
    global_json: bool,
    lexicon: &Lexicon,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(term = ?args.term, "executing rewrite command");

    let content = args.input.read(max_input)?;
    let rewritten = match (&args.term, &args.replacement) {
        (Some(term), Some(replacement)) => {
            if term.is_empty() {
                bail!("--term must not be empty");
            }
            apply_single_replacement(&content, term, replacement)
        }
        _ => generate_supportive_version_with(&content, lexicon),
    };

    if global_json {
        let output = RewriteOutput {
            original: &content,
            rewritten: &rewritten,
            changed: rewritten != content,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{rewritten}");
    }

    Ok(())
}
