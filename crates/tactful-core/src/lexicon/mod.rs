//! Lexicon store: trigger terms and patterns grouped by category.
//!
//! A [`Lexicon`] is an ordered list of [`LexiconEntry`] rows. Each row belongs
//! to one [`Category`], and the category alone decides severity and the
//! penalty pair charged per occurrence. The built-in table lives in
//! [`builtin`]; deployments can append rows through configuration via
//! [`Lexicon::extended`].

mod builtin;

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, LexiconResult};

/// Tone category a trigger belongs to.
///
/// Variants are declared in scan order, which is also the order issues,
/// tips and notes are reported in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Category {
    /// Profanity and insults.
    Vulgar,
    /// Negative-sentiment judgments.
    Negative,
    /// Confrontational "why are you..." questions.
    Questioning,
    /// Complaints about time and pace.
    Impatient,
    /// Commands and urgency.
    Aggressive,
    /// Minimizing words.
    Dismissive,
}

impl Category {
    /// All categories in scan order.
    pub const SCAN_ORDER: [Self; 6] = [
        Self::Vulgar,
        Self::Negative,
        Self::Questioning,
        Self::Impatient,
        Self::Aggressive,
        Self::Dismissive,
    ];

    /// Returns the category tag as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vulgar => "vulgar",
            Self::Negative => "negative",
            Self::Questioning => "questioning",
            Self::Impatient => "impatient",
            Self::Aggressive => "aggressive",
            Self::Dismissive => "dismissive",
        }
    }

    /// Display severity for issues in this category.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Vulgar | Self::Questioning => Severity::High,
            Self::Negative | Self::Impatient | Self::Aggressive => Severity::Medium,
            Self::Dismissive => Severity::Low,
        }
    }

    /// Points deducted from each score per matched occurrence.
    pub const fn penalty(&self) -> Penalty {
        match self {
            Self::Vulgar => Penalty::new(25, 30),
            Self::Negative => Penalty::new(15, 20),
            Self::Questioning => Penalty::new(20, 25),
            Self::Impatient => Penalty::new(12, 18),
            Self::Aggressive => Penalty::new(10, 15),
            Self::Dismissive => Penalty::new(5, 10),
        }
    }

    /// Replacement used by entries that don't declare their own.
    pub const fn default_replacement(&self) -> &'static str {
        match self {
            Self::Vulgar => "more appropriate term",
            Self::Negative => "more constructive term",
            Self::Questioning => "I'd like to understand",
            Self::Impatient => "taking some time",
            Self::Aggressive => "gentler alternative",
            Self::Dismissive => "more inclusive phrasing",
        }
    }

    /// Why an occurrence in this category is flagged.
    pub const fn rationale(&self) -> &'static str {
        match self {
            Self::Vulgar => "Profanity and insults read as hostile and unprofessional.",
            Self::Negative => "Harsh judgments can discourage the reader.",
            Self::Questioning => "Confrontational questions put the reader on the defensive.",
            Self::Impatient => "Complaints about timing add pressure without helping.",
            Self::Aggressive => "Commands and urgency can feel like pressure rather than a request.",
            Self::Dismissive => "Minimizing words can make the reader feel brushed aside.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display severity of an issue. Not used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Strongly recommended to fix.
    High,
    /// Worth fixing.
    Medium,
    /// Minor.
    Low,
}

impl Severity {
    /// Returns the severity as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score deductions for a single matched occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Penalty {
    /// Deducted from the respectfulness score.
    pub score: i32,
    /// Deducted from the mental-health score.
    pub mental_health: i32,
}

impl Penalty {
    const fn new(score: i32, mental_health: i32) -> Self {
        Self {
            score,
            mental_health,
        }
    }
}

/// How an entry recognizes its trigger.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Lowercase term matched as a case-insensitive substring anywhere in the text.
    Literal(String),
    /// Case-insensitive pattern; each match span is reported with its original casing.
    Pattern(Regex),
}

impl Matcher {
    /// Source text of the trigger: the term itself or the pattern source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(term) => term,
            Self::Pattern(re) => re.as_str(),
        }
    }
}

/// One occurrence of an entry's trigger in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMatch {
    /// Text that triggered the entry.
    pub matched_text: String,
    /// Replacement for this occurrence, with any pattern template expanded.
    pub replacement: String,
}

/// A row of the lexicon.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    category: Category,
    matcher: Matcher,
    replacement: String,
}

impl LexiconEntry {
    /// Create an entry matching a literal term.
    ///
    /// When `replacement` is `None` the category's default replacement is used.
    pub fn literal(
        category: Category,
        term: &str,
        replacement: Option<&str>,
    ) -> LexiconResult<Self> {
        let term = term.trim();
        if term.is_empty() {
            return Err(LexiconError::EmptyTrigger { category });
        }
        Ok(Self {
            category,
            matcher: Matcher::Literal(term.to_lowercase()),
            replacement: replacement
                .unwrap_or_else(|| category.default_replacement())
                .to_string(),
        })
    }

    /// Create an entry matching a case-insensitive pattern.
    ///
    /// `template` may reference capture groups (`$1`, `${name}`); it is
    /// expanded once per match. When `None` the category's default
    /// replacement is used.
    pub fn pattern(
        category: Category,
        pattern: &str,
        template: Option<&str>,
    ) -> LexiconResult<Self> {
        if pattern.trim().is_empty() {
            return Err(LexiconError::EmptyTrigger { category });
        }
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| LexiconError::InvalidPattern {
                category,
                pattern: pattern.to_string(),
                source: Box::new(source),
            })?;
        Ok(Self {
            category,
            matcher: Matcher::Pattern(regex),
            replacement: template
                .unwrap_or_else(|| category.default_replacement())
                .to_string(),
        })
    }

    /// Category of this entry.
    pub const fn category(&self) -> Category {
        self.category
    }

    /// How this entry matches.
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Replacement text, or the template for pattern entries.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Display severity, fixed by the category.
    pub const fn severity(&self) -> Severity {
        self.category.severity()
    }

    /// Penalty pair charged per occurrence, fixed by the category.
    pub const fn penalty(&self) -> Penalty {
        self.category.penalty()
    }

    /// Find every occurrence of this entry.
    ///
    /// `lower` must be `text` lowercased; literal terms are counted in it as
    /// non-overlapping substrings, patterns run against `text` itself.
    pub fn find_matches(&self, text: &str, lower: &str) -> Vec<EntryMatch> {
        match &self.matcher {
            Matcher::Literal(term) => lower
                .matches(term.as_str())
                .map(|_| EntryMatch {
                    matched_text: term.clone(),
                    replacement: self.replacement.clone(),
                })
                .collect(),
            Matcher::Pattern(re) => re
                .captures_iter(text)
                .map(|caps| {
                    let mut replacement = String::new();
                    caps.expand(&self.replacement, &mut replacement);
                    EntryMatch {
                        matched_text: caps[0].to_string(),
                        replacement,
                    }
                })
                .collect(),
        }
    }
}

/// A term added to the lexicon through configuration.
///
/// Exactly one of `term` or `pattern` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct CustomTerm {
    /// Category the term belongs to.
    pub category: Category,
    /// Literal term, matched as a case-insensitive substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Regular expression, matched case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Suggested replacement (falls back to the category default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl CustomTerm {
    /// Build the lexicon entry this term describes.
    pub fn to_entry(&self) -> LexiconResult<LexiconEntry> {
        let replacement = self.replacement.as_deref();
        match (self.term.as_deref(), self.pattern.as_deref()) {
            (Some(term), None) => LexiconEntry::literal(self.category, term, replacement),
            (None, Some(pattern)) => LexiconEntry::pattern(self.category, pattern, replacement),
            _ => Err(LexiconError::EmptyTrigger {
                category: self.category,
            }),
        }
    }
}

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    let entries = builtin::TABLE
        .iter()
        .map(|&(category, trigger, replacement)| match trigger {
            builtin::Trigger::Term(term) => LexiconEntry::literal(category, term, replacement),
            builtin::Trigger::Phrase(pattern) => {
                LexiconEntry::pattern(category, pattern, replacement)
            }
        })
        .collect::<LexiconResult<Vec<_>>>()
        .expect("built-in lexicon is valid");
    Lexicon::new(entries)
});

/// An ordered, immutable set of lexicon entries.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Create a lexicon from entries.
    ///
    /// Entry order within a category is preserved; it decides issue order.
    pub const fn new(entries: Vec<LexiconEntry>) -> Self {
        Self { entries }
    }

    /// The compiled-in lexicon.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// The built-in lexicon followed by configured terms.
    #[tracing::instrument(skip_all, fields(extra = extra.len()))]
    pub fn extended(extra: &[CustomTerm]) -> LexiconResult<Self> {
        let mut entries = Self::builtin().entries.clone();
        for term in extra {
            entries.push(term.to_entry()?);
        }
        tracing::debug!(entries = entries.len(), "lexicon assembled");
        Ok(Self::new(entries))
    }

    /// Entries of one category, in table order.
    pub fn entries_for_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &LexiconEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(category: Category) -> Vec<String> {
        Lexicon::builtin()
            .entries_for_category(category)
            .map(|e| e.matcher().as_str().to_string())
            .collect()
    }

    #[test]
    fn every_category_has_entries() {
        for category in Category::SCAN_ORDER {
            assert!(
                Lexicon::builtin()
                    .entries_for_category(category)
                    .next()
                    .is_some(),
                "no entries for {category}"
            );
        }
    }

    #[test]
    fn impatient_terms_in_table_order() {
        assert_eq!(
            terms(Category::Impatient),
            vec![
                "forever",
                "taking too long",
                "slow",
                "delayed",
                "behind schedule",
                "overdue",
                "late"
            ]
        );
    }

    #[test]
    fn aggressive_includes_urgency_terms() {
        let aggressive = terms(Category::Aggressive);
        for term in ["must", "need to", "immediately", "urgent", "asap"] {
            assert!(aggressive.iter().any(|t| t == term), "missing {term}");
        }
    }

    #[test]
    fn dismissive_minimizers_delete() {
        let just = Lexicon::builtin()
            .entries_for_category(Category::Dismissive)
            .find(|e| e.matcher().as_str() == "just")
            .unwrap();
        assert_eq!(just.replacement(), "");
        assert_eq!(just.severity(), Severity::Low);
    }

    #[test]
    fn questioning_entries_are_patterns() {
        assert!(
            Lexicon::builtin()
                .entries_for_category(Category::Questioning)
                .all(|e| matches!(e.matcher(), Matcher::Pattern(_)))
        );
    }

    #[test]
    fn penalties_are_category_constants() {
        assert_eq!(Category::Vulgar.penalty(), Penalty::new(25, 30));
        assert_eq!(Category::Negative.penalty(), Penalty::new(15, 20));
        assert_eq!(Category::Questioning.penalty(), Penalty::new(20, 25));
        assert_eq!(Category::Impatient.penalty(), Penalty::new(12, 18));
        assert_eq!(Category::Aggressive.penalty(), Penalty::new(10, 15));
        assert_eq!(Category::Dismissive.penalty(), Penalty::new(5, 10));
    }

    #[test]
    fn literal_matches_substrings_case_insensitively() {
        let entry = LexiconEntry::literal(Category::Vulgar, "crap", None).unwrap();
        let text = "Scrap the CRAPPY draft";
        let matches = entry.find_matches(text, &text.to_lowercase());
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched_text, "crap");
        assert_eq!(matches[0].replacement, "more appropriate term");
    }

    #[test]
    fn pattern_keeps_original_casing() {
        let entry =
            LexiconEntry::pattern(Category::Questioning, r"\bwhy\s+are\s+you\b", Some("X"))
                .unwrap();
        let text = "WHY are you here? why  are you there?";
        let matches = entry.find_matches(text, &text.to_lowercase());
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched_text, "WHY are you");
        assert_eq!(matches[1].matched_text, "why  are you");
    }

    #[test]
    fn pattern_template_expands_captures() {
        let entry = LexiconEntry::pattern(
            Category::Questioning,
            r"\bwhy\s+did\s+you\s+(\w+)",
            Some("could you tell me more about how you $1"),
        )
        .unwrap();
        let text = "Why did you delete it";
        let matches = entry.find_matches(text, &text.to_lowercase());
        assert_eq!(
            matches[0].replacement,
            "could you tell me more about how you delete"
        );
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = LexiconEntry::pattern(Category::Questioning, "why (", None).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidPattern { .. }));
    }

    #[test]
    fn blank_term_is_rejected() {
        let err = LexiconEntry::literal(Category::Vulgar, "   ", None).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyTrigger { .. }));
    }

    #[test]
    fn custom_term_requires_exactly_one_trigger() {
        let both = CustomTerm {
            category: Category::Negative,
            term: Some("meh".into()),
            pattern: Some("meh".into()),
            replacement: None,
        };
        assert!(both.to_entry().is_err());

        let neither = CustomTerm {
            category: Category::Negative,
            term: None,
            pattern: None,
            replacement: None,
        };
        assert!(neither.to_entry().is_err());
    }

    #[test]
    fn extended_appends_after_builtin_entries() {
        let extra = [CustomTerm {
            category: Category::Vulgar,
            term: Some("Heck".into()),
            pattern: None,
            replacement: Some("goodness".into()),
        }];
        let lexicon = Lexicon::extended(&extra).unwrap();
        assert_eq!(lexicon.len(), Lexicon::builtin().len() + 1);

        let last = lexicon
            .entries_for_category(Category::Vulgar)
            .last()
            .unwrap();
        assert_eq!(last.matcher().as_str(), "heck");
        assert_eq!(last.replacement(), "goodness");
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Questioning).unwrap();
        assert_eq!(json, "\"questioning\"");
    }
}
