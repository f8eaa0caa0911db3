//! Tone analysis of a message.
//!
//! [`analyze`] scans a message against every lexicon category in scan order
//! and charges each occurrence's penalty against two scores that start at
//! 100: respectfulness and mental-health impact. Both are floored at 0.
//!
//! Analysis is pure: the same text and lexicon always produce the same
//! [`AnalysisResult`].

pub mod advice;
pub mod report;

pub use report::{AnalysisResult, Issue, ScoreBand};

use std::borrow::Cow;

use crate::lexicon::{Category, Lexicon};

/// Starting value of both scores.
pub const MAX_SCORE: i32 = 100;

/// Lowest score in the good band.
pub const GOOD_SCORE: i32 = 80;

/// Lowest score in the fair band.
pub const FAIR_SCORE: i32 = 60;

/// Mental-health scores below this add supportive advice and framing.
pub const MENTAL_HEALTH_CONCERN: i32 = 70;

/// Analyze a message against the built-in lexicon.
///
/// Returns `None` for empty or whitespace-only text: there is nothing to
/// analyze.
pub fn analyze(text: &str) -> Option<AnalysisResult> {
    analyze_with(text, Lexicon::builtin())
}

/// Analyze a message against a specific lexicon.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_with(text: &str, lexicon: &Lexicon) -> Option<AnalysisResult> {
    if text.trim().is_empty() {
        tracing::debug!("empty message, skipping analysis");
        return None;
    }

    let lower = text.to_lowercase();
    let mut issues = Vec::new();
    let mut score = MAX_SCORE;
    let mut mental_health_score = MAX_SCORE;

    for category in Category::SCAN_ORDER {
        let penalty = category.penalty();
        for entry in lexicon.entries_for_category(category) {
            for found in entry.find_matches(text, &lower) {
                score -= penalty.score;
                mental_health_score -= penalty.mental_health;
                issues.push(Issue {
                    category,
                    matched_text: found.matched_text,
                    suggested_replacement: found.replacement,
                    severity: category.severity(),
                    rationale: Cow::Borrowed(category.rationale()),
                });
            }
        }
    }

    let score = score.max(0);
    let mental_health_score = mental_health_score.max(0);
    let tips = advice::tips(&issues, mental_health_score);
    let positive_notes = advice::positive_notes(&issues, score, mental_health_score);

    tracing::debug!(
        issues = issues.len(),
        score,
        mental_health_score,
        "message analyzed"
    );

    Some(AnalysisResult {
        score,
        mental_health_score,
        issues,
        tips,
        positive_notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{CustomTerm, Severity};

    fn matched(result: &AnalysisResult) -> Vec<(Category, &str)> {
        result
            .issues
            .iter()
            .map(|i| (i.category, i.matched_text.as_str()))
            .collect()
    }

    #[test]
    fn empty_and_blank_input_is_not_analyzed() {
        assert!(analyze("").is_none());
        assert!(analyze("   ").is_none());
        assert!(analyze("\n\t ").is_none());
    }

    #[test]
    fn clean_message_scores_full_marks() {
        let result = analyze("Thanks for the update, this looks great.").unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.mental_health_score, 100);
        assert!(result.issues.is_empty());
        assert!(result.tips.is_empty());
        assert_eq!(result.positive_notes, vec![advice::CONGRATULATIONS]);
        assert!(result.is_exemplary());
    }

    #[test]
    fn command_with_insult() {
        let result = analyze("You must fix this stupid bug immediately").unwrap();
        assert_eq!(
            matched(&result),
            vec![
                (Category::Vulgar, "stupid"),
                (Category::Aggressive, "must"),
                (Category::Aggressive, "immediately"),
            ]
        );
        assert_eq!(result.score, 55);
        assert_eq!(result.mental_health_score, 40);
        assert_eq!(result.issues[0].severity, Severity::High);
        assert_eq!(result.issues[0].suggested_replacement, "unclear");
        assert!(result.needs_supportive_version());
        assert_eq!(result.respectfulness_band(), ScoreBand::Poor);
    }

    #[test]
    fn confrontational_question_about_timing() {
        let result = analyze("Why are you always late on this?").unwrap();
        assert_eq!(
            matched(&result),
            vec![
                (Category::Questioning, "Why are you"),
                (Category::Impatient, "late"),
            ]
        );
        assert_eq!(result.score, 68);
        assert_eq!(result.mental_health_score, 57);
        assert_eq!(
            result.issues[0].suggested_replacement,
            "I understand this might be"
        );
        assert_eq!(result.issues[1].suggested_replacement, "coming along");
    }

    #[test]
    fn every_occurrence_is_charged() {
        let result = analyze("late, late, late").unwrap();
        assert_eq!(result.issues.len(), 3);
        assert_eq!(result.score, 100 - 3 * 12);
        assert_eq!(result.mental_health_score, 100 - 3 * 18);
    }

    #[test]
    fn substrings_inside_words_still_match() {
        let result = analyze("The translated doc").unwrap();
        assert_eq!(matched(&result), vec![(Category::Impatient, "late")]);
    }

    #[test]
    fn scores_floor_at_zero() {
        let result = analyze("stupid stupid stupid stupid stupid").unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.mental_health_score, 0);
        assert_eq!(result.issues.len(), 5);
    }

    #[test]
    fn issues_follow_scan_order() {
        let result = analyze("Just why are you so slow? I hate this crap.").unwrap();
        let categories: Vec<Category> = result.issues.iter().map(|i| i.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(result.categories().first(), Some(&Category::Vulgar));
    }

    #[test]
    fn tips_deduplicate_per_category() {
        let result = analyze("You must and should do it").unwrap();
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.tips.len(), 2);
        assert_eq!(result.tips[0], advice::GENERAL_TIP);
    }

    #[test]
    fn low_mental_health_gets_extra_advice() {
        let result = analyze("This is terrible and useless").unwrap();
        assert_eq!(result.mental_health_score, 60);
        assert_eq!(result.tips.last().unwrap(), advice::MENTAL_HEALTH_TIP);
        assert_eq!(
            result.positive_notes.last().unwrap(),
            advice::MENTAL_HEALTH_NOTE
        );
    }

    #[test]
    fn issue_rationale_borrows_category_text() {
        let result = analyze("only only only").unwrap();
        assert_eq!(result.issues.len(), 3);
        for issue in &result.issues {
            assert!(matches!(issue.rationale, Cow::Borrowed(_)));
            assert_eq!(issue.rationale, Category::Dismissive.rationale());
        }

        let json = serde_json::to_string(&result.issues[0]).unwrap();
        let back: Issue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result.issues[0]);
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "Obviously you need to stop being so slow. Why is this overdue?";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn adding_a_trigger_never_raises_scores() {
        let base = "Please review the draft when you get a chance";
        let before = analyze(base).unwrap();
        for category in Category::SCAN_ORDER {
            for entry in Lexicon::builtin().entries_for_category(category) {
                let trigger = match entry.matcher() {
                    crate::lexicon::Matcher::Literal(term) => term.clone(),
                    crate::lexicon::Matcher::Pattern(_) => "why are you".to_string(),
                };
                let after = analyze(&format!("{base} {trigger}")).unwrap();
                assert!(after.score <= before.score, "{trigger} raised score");
                assert!(
                    after.mental_health_score <= before.mental_health_score,
                    "{trigger} raised mental-health score"
                );
            }
        }
    }

    #[test]
    fn custom_lexicon_terms_are_scanned() {
        let lexicon = Lexicon::extended(&[CustomTerm {
            category: Category::Negative,
            term: Some("meh".into()),
            pattern: None,
            replacement: None,
        }])
        .unwrap();
        let result = analyze_with("meh", &lexicon).unwrap();
        assert_eq!(matched(&result), vec![(Category::Negative, "meh")]);
        assert_eq!(
            result.issues[0].suggested_replacement,
            "more constructive term"
        );
        assert_eq!(result.score, 85);
    }

    #[test]
    fn empty_lexicon_finds_nothing() {
        let result = analyze_with("stupid", &Lexicon::default()).unwrap();
        assert!(result.issues.is_empty());
        assert_eq!(result.score, 100);
    }
}
