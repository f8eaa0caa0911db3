//! Tips and positive notes derived from the issues found.

use crate::lexicon::Category;

use super::report::Issue;
use super::{GOOD_SCORE, MENTAL_HEALTH_CONCERN};

/// General tip added once whenever any issue is found.
pub const GENERAL_TIP: &str = "Consider using more supportive and collaborative language";

/// Tip added when the mental-health score falls under the concern threshold.
pub const MENTAL_HEALTH_TIP: &str =
    "This message might create stress or anxiety. Consider a more supportive tone";

/// Note added when the mental-health score falls under the concern threshold.
pub const MENTAL_HEALTH_NOTE: &str = "Add a word of appreciation or an offer of help";

/// The single note for a clean message.
pub const CONGRATULATIONS: &str =
    "Great! This message promotes respectful workplace communication.";

const fn category_tip(category: Category) -> &'static str {
    match category {
        Category::Vulgar => "Replace inappropriate language with professional alternatives",
        Category::Negative => "Reframe negative judgments as specific, constructive observations",
        Category::Questioning => "Turn confrontational questions into open, curious requests",
        Category::Impatient => "Acknowledge the effort involved before raising timing concerns",
        Category::Aggressive => {
            "Use gentler phrasing to encourage collaboration rather than demand compliance"
        }
        Category::Dismissive => "Avoid minimizing words that can make the reader feel brushed aside",
    }
}

const fn category_note(category: Category) -> &'static str {
    match category {
        Category::Vulgar => "Describe the problem itself rather than labeling it or the person",
        Category::Negative => "Mention what is working before what needs to change",
        Category::Questioning => "Explain what you need and invite their perspective",
        Category::Impatient => "Share the timeline you need and ask what would help meet it",
        Category::Aggressive => "Frame requests as invitations, e.g. \"Would you be able to...\"",
        Category::Dismissive => "Acknowledge the other person's point of view",
    }
}

fn present_categories(issues: &[Issue]) -> impl Iterator<Item = Category> + '_ {
    Category::SCAN_ORDER
        .into_iter()
        .filter(move |c| issues.iter().any(|i| i.category == *c))
}

/// Advisory tips, deduplicated per category.
pub fn tips(issues: &[Issue], mental_health_score: i32) -> Vec<String> {
    let mut tips = Vec::new();
    if !issues.is_empty() {
        tips.push(GENERAL_TIP.to_string());
    }
    tips.extend(present_categories(issues).map(|c| category_tip(c).to_string()));
    if mental_health_score < MENTAL_HEALTH_CONCERN {
        tips.push(MENTAL_HEALTH_TIP.to_string());
    }
    tips
}

/// Suggestions for what to add, or a congratulation for a clean message.
pub fn positive_notes(issues: &[Issue], score: i32, mental_health_score: i32) -> Vec<String> {
    if issues.is_empty() {
        return if score >= GOOD_SCORE {
            vec![CONGRATULATIONS.to_string()]
        } else {
            Vec::new()
        };
    }

    let mut notes: Vec<String> = present_categories(issues)
        .map(|c| category_note(c).to_string())
        .collect();
    if mental_health_score < MENTAL_HEALTH_CONCERN {
        notes.push(MENTAL_HEALTH_NOTE.to_string());
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(category: Category) -> Issue {
        Issue {
            category,
            matched_text: "x".into(),
            suggested_replacement: "y".into(),
            severity: category.severity(),
            rationale: category.rationale().into(),
        }
    }

    #[test]
    fn no_issues_no_tips() {
        assert!(tips(&[], 100).is_empty());
    }

    #[test]
    fn tips_follow_scan_order_once_per_category() {
        let issues = [
            issue(Category::Dismissive),
            issue(Category::Vulgar),
            issue(Category::Vulgar),
        ];
        let tips = tips(&issues, 80);
        assert_eq!(
            tips,
            vec![
                GENERAL_TIP,
                category_tip(Category::Vulgar),
                category_tip(Category::Dismissive),
            ]
        );
    }

    #[test]
    fn low_mental_health_adds_tip_and_note() {
        let issues = [issue(Category::Vulgar), issue(Category::Vulgar)];
        assert_eq!(tips(&issues, 40).last().unwrap(), MENTAL_HEALTH_TIP);
        assert_eq!(
            positive_notes(&issues, 50, 40).last().unwrap(),
            MENTAL_HEALTH_NOTE
        );
    }

    #[test]
    fn clean_message_is_congratulated() {
        assert_eq!(positive_notes(&[], 100, 100), vec![CONGRATULATIONS]);
    }
}
