//! Core library for tactful.
//!
//! Scores a message for respectfulness and mental-health impact, lists the
//! words and phrases that cost points, and rewrites the message on request.
//! Everything here is pure and synchronous: the same text and lexicon always
//! give the same result.
//!
//! # Modules
//!
//! - [`lexicon`] - Trigger terms and patterns grouped by category
//! - [`analysis`] - Scoring, issues, tips and notes
//! - [`rewrite`] - Single replacements and supportive versions
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use tactful_core::{analyze, generate_supportive_version};
//!
//! let result = analyze("Why are you always late on this?").expect("non-empty text");
//! assert_eq!(result.score, 68);
//! assert_eq!(result.mental_health_score, 57);
//!
//! let kinder = generate_supportive_version("Why are you always late on this?");
//! assert!(kinder.starts_with("I hope you're doing well."));
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod rewrite;

pub use analysis::{AnalysisResult, Issue, ScoreBand, analyze, analyze_with};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, LexiconError, LexiconResult};
pub use lexicon::{Category, CustomTerm, Lexicon, LexiconEntry, Matcher, Severity};
pub use rewrite::{
    apply_single_replacement, generate_supportive_version, generate_supportive_version_with,
};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
