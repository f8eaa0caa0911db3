//! Rewriting messages: single fixes and whole-message supportive versions.

use regex::{NoExpand, RegexBuilder};

use crate::analysis::{self, GOOD_SCORE, MENTAL_HEALTH_CONCERN};
use crate::lexicon::Lexicon;

/// Opening added to messages with a low mental-health score.
pub const EMPATHETIC_PREAMBLE: &str = "I hope you're doing well.";

/// Closing added to messages with a low mental-health score.
pub const EMPATHETIC_POSTAMBLE: &str =
    "Please let me know if you need any support or if there's anything I can do to help.";

/// Closing added to messages with a low respectfulness score.
pub const COURTESY_CLOSING: &str = "Thank you for your understanding.";

/// Replace every case-insensitive occurrence of `matched_text` with `replacement`.
///
/// Both strings are taken literally: regex metacharacters in `matched_text`
/// are escaped and `$` in `replacement` is not expanded. Returns `text`
/// unchanged when `matched_text` is empty or absent.
pub fn apply_single_replacement(text: &str, matched_text: &str, replacement: &str) -> String {
    if matched_text.is_empty() {
        return text.to_string();
    }

    let re = match RegexBuilder::new(&regex::escape(matched_text))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(err) => {
            tracing::warn!(error = %err, "cannot build replacement matcher, leaving text as is");
            return text.to_string();
        }
    };

    re.replace_all(text, NoExpand(replacement)).into_owned()
}

/// Rewrite a message using the built-in lexicon.
///
/// See [`generate_supportive_version_with`].
pub fn generate_supportive_version(text: &str) -> String {
    generate_supportive_version_with(text, Lexicon::builtin())
}

/// Rewrite a message: replace every issue, then frame it if warranted.
///
/// Replacements are applied in issue order to the progressively rewritten
/// text. Framing is decided by the analysis of the original text: a
/// mental-health score under 70 wraps the message in an empathetic opening
/// and closing; otherwise a respectfulness score under 80 appends a courtesy
/// closing. Empty input is returned unchanged.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn generate_supportive_version_with(text: &str, lexicon: &Lexicon) -> String {
    let Some(analysis) = analysis::analyze_with(text, lexicon) else {
        return text.to_string();
    };

    let rewritten = analysis
        .issues
        .iter()
        .fold(text.to_string(), |acc, issue| {
            apply_single_replacement(&acc, &issue.matched_text, &issue.suggested_replacement)
        });

    let framed = if analysis.mental_health_score < MENTAL_HEALTH_CONCERN {
        format!("{EMPATHETIC_PREAMBLE} {rewritten} {EMPATHETIC_POSTAMBLE}")
    } else if analysis.score < GOOD_SCORE {
        format!("{rewritten} {COURTESY_CLOSING}")
    } else {
        rewritten
    };

    tracing::debug!(
        issues = analysis.issues.len(),
        score = analysis.score,
        mental_health_score = analysis.mental_health_score,
        "supportive version generated"
    );
    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_all_occurrences_case_insensitively() {
        assert_eq!(
            apply_single_replacement("Must we? We MUST.", "must", "could"),
            "could we? We could."
        );
    }

    #[test]
    fn absent_term_is_a_no_op() {
        let text = "All good here.";
        assert_eq!(apply_single_replacement(text, "stupid", "unclear"), text);
    }

    #[test]
    fn empty_term_is_a_no_op() {
        assert_eq!(apply_single_replacement("abc", "", "X"), "abc");
    }

    #[test]
    fn matched_text_is_literal() {
        assert_eq!(apply_single_replacement("a.b axb", "a.b", "X"), "X axb");
        assert_eq!(apply_single_replacement("(why?) why", "(why?)", "ok"), "ok why");
    }

    #[test]
    fn replacement_is_literal() {
        assert_eq!(apply_single_replacement("cost", "cost", "$1 ${x}"), "$1 ${x}");
    }

    #[test]
    fn deletion_leaves_surrounding_text() {
        assert_eq!(
            apply_single_replacement("It's just a typo", "just", ""),
            "It's  a typo"
        );
    }

    #[test]
    fn supportive_version_wraps_low_mental_health() {
        assert_eq!(
            generate_supportive_version("Why are you always late on this?"),
            "I hope you're doing well. I understand this might be always coming along on this? \
             Please let me know if you need any support or if there's anything I can do to help."
        );
    }

    #[test]
    fn supportive_version_rewrites_commands() {
        assert_eq!(
            generate_supportive_version("You must fix this stupid bug immediately"),
            "I hope you're doing well. You could fix this unclear bug when you have a moment \
             Please let me know if you need any support or if there's anything I can do to help."
        );
    }

    #[test]
    fn moderate_issues_get_courtesy_closing() {
        // score 75, mental health 70
        assert_eq!(
            generate_supportive_version("That demo was lame."),
            "That demo was not ideal. Thank you for your understanding."
        );
    }

    #[test]
    fn mild_issues_are_rewritten_without_framing() {
        // score 95, mental health 90
        assert_eq!(
            generate_supportive_version("Obviously the plan works."),
            "as you may know the plan works."
        );
    }

    #[test]
    fn clean_message_is_unchanged() {
        let text = "Thanks so much for your help today!";
        assert_eq!(generate_supportive_version(text), text);
    }

    #[test]
    fn empty_message_is_unchanged() {
        assert_eq!(generate_supportive_version("   "), "   ");
    }

    #[test]
    fn repeated_triggers_replace_once_and_compound() {
        // Second "late" issue is a no-op after the first replacement.
        assert_eq!(
            generate_supportive_version("late and late"),
            "I hope you're doing well. coming along and coming along \
             Please let me know if you need any support or if there's anything I can do to help."
        );
    }
}
