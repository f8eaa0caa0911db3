//! The compiled-in lexicon table.
//!
//! One row per trigger: category, trigger, and replacement. A `None`
//! replacement falls back to [`Category::default_replacement`]. Rows of the
//! same category keep their relative order; that order is the issue order.

use super::Category;

/// How a row's trigger is written.
#[derive(Debug, Clone, Copy)]
pub(super) enum Trigger {
    /// Literal term, case-insensitive substring.
    Term(&'static str),
    /// Regular expression, case-insensitive.
    Phrase(&'static str),
}

use Category::{Aggressive, Dismissive, Impatient, Negative, Questioning, Vulgar};
use Trigger::{Phrase, Term};

pub(super) static TABLE: &[(Category, Trigger, Option<&str>)] = &[
    // Vulgar
    (Vulgar, Term("fuck"), Some("challenging")),
    (Vulgar, Term("shit"), Some("difficult situation")),
    (Vulgar, Term("damn"), Some("unfortunate")),
    (Vulgar, Term("stupid"), Some("unclear")),
    (Vulgar, Term("dumb"), Some("confusing")),
    (Vulgar, Term("idiot"), Some("person")),
    (Vulgar, Term("moron"), Some("colleague")),
    (Vulgar, Term("retard"), Some("delay")),
    (Vulgar, Term("lame"), Some("not ideal")),
    (Vulgar, Term("suck"), Some("are challenging")),
    (Vulgar, Term("crap"), Some("low quality")),
    // Negative
    (Negative, Term("hate"), Some("find challenging")),
    (Negative, Term("terrible"), Some("needs improvement")),
    (Negative, Term("awful"), Some("concerning")),
    (Negative, Term("worst"), Some("most challenging")),
    (Negative, Term("horrible"), Some("difficult")),
    (Negative, Term("disgusting"), Some("unacceptable")),
    (Negative, Term("pathetic"), Some("needs attention")),
    (Negative, Term("useless"), Some("not effective")),
    (Negative, Term("worthless"), Some("needs improvement")),
    // Questioning
    (
        Questioning,
        Phrase(r"\bwhy\s+are\s+you\b"),
        Some("I understand this might be"),
    ),
    (
        Questioning,
        Phrase(r"\bwhy\s+do\s+you\b"),
        Some("could you help me understand how you"),
    ),
    (
        Questioning,
        Phrase(r"\bwhy\s+don['’]?t\s+you\b"),
        Some("would you consider whether to"),
    ),
    (
        Questioning,
        Phrase(r"\bwhy\s+can['’]?t\s+you\b"),
        Some("is there a way I can help you"),
    ),
    (
        Questioning,
        Phrase(r"\bwhy\s+haven['’]?t\s+you\b"),
        Some("I was wondering whether you've had a chance to"),
    ),
    (
        Questioning,
        Phrase(r"\bwhy\s+is\s+this\b"),
        Some("could you help me understand why this is"),
    ),
    (
        Questioning,
        Phrase(r"\bwhy\s+take\b"),
        Some("I'd like to understand what it takes to take"),
    ),
    // Impatient
    (Impatient, Term("forever"), Some("a while")),
    (Impatient, Term("taking too long"), Some("taking some time")),
    (Impatient, Term("slow"), Some("steady")),
    (Impatient, Term("delayed"), Some("rescheduled")),
    (Impatient, Term("behind schedule"), Some("adjusting the timeline")),
    (Impatient, Term("overdue"), Some("still in progress")),
    (Impatient, Term("late"), Some("coming along")),
    // Aggressive
    (Aggressive, Term("must"), Some("could")),
    (Aggressive, Term("should"), Some("might consider")),
    (Aggressive, Term("need to"), Some("would be helpful to")),
    (Aggressive, Term("have to"), Some("could")),
    (Aggressive, Term("demand"), Some("request")),
    (Aggressive, Term("require"), Some("would appreciate")),
    (Aggressive, Term("insist"), Some("suggest")),
    (Aggressive, Term("force"), Some("encourage")),
    (Aggressive, Term("immediately"), Some("when you have a moment")),
    (Aggressive, Term("urgent"), Some("time-sensitive")),
    (Aggressive, Term("asap"), Some("when you can")),
    // Dismissive
    (Dismissive, Term("whatever"), Some("I understand")),
    (Dismissive, Term("obviously"), Some("as you may know")),
    (Dismissive, Term("clearly"), Some("it appears that")),
    (Dismissive, Term("just"), Some("")),
    (Dismissive, Term("simply"), Some("")),
    (Dismissive, Term("merely"), Some("")),
    (Dismissive, Term("only"), Some("")),
];
