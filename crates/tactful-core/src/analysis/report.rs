//! Result structs for message analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::{Category, Severity};

use super::{FAIR_SCORE, GOOD_SCORE};

/// One detected occurrence of a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    /// Category of the trigger.
    pub category: Category,
    /// Text that triggered the issue.
    pub matched_text: String,
    /// Suggested replacement; empty means "delete".
    pub suggested_replacement: String,
    /// Display severity.
    pub severity: Severity,
    /// Why this is flagged. Borrowed from the category for analyzed issues.
    pub rationale: Cow<'static, str>,
}

/// Analysis of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// Respectfulness score (0–100).
    pub score: i32,
    /// Mental-health score (0–100).
    pub mental_health_score: i32,
    /// Issues in scan order, one per occurrence.
    pub issues: Vec<Issue>,
    /// Advice, at most one per category plus general notes.
    pub tips: Vec<String>,
    /// What to add to improve the message.
    pub positive_notes: Vec<String>,
}

impl AnalysisResult {
    /// Band for the respectfulness score.
    pub const fn respectfulness_band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }

    /// Band for the mental-health score.
    pub const fn mental_health_band(&self) -> ScoreBand {
        ScoreBand::of(self.mental_health_score)
    }

    /// Whether a supportive rewrite should be offered.
    pub const fn needs_supportive_version(&self) -> bool {
        self.score < GOOD_SCORE
    }

    /// Whether both scores are in the good band.
    pub const fn is_exemplary(&self) -> bool {
        self.score >= GOOD_SCORE && self.mental_health_score >= GOOD_SCORE
    }

    /// Distinct categories present in the issues, in scan order.
    pub fn categories(&self) -> Vec<Category> {
        Category::SCAN_ORDER
            .into_iter()
            .filter(|c| self.issues.iter().any(|i| i.category == *c))
            .collect()
    }
}

/// Coarse grading of a score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80 and above.
    Good,
    /// 60 to 79.
    Fair,
    /// Below 60.
    Poor,
}

impl ScoreBand {
    /// Grade a score.
    pub const fn of(score: i32) -> Self {
        if score >= GOOD_SCORE {
            Self::Good
        } else if score >= FAIR_SCORE {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Returns the band as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
