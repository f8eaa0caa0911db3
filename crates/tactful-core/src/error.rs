//! Error types for tactful-core.

use thiserror::Error;

use crate::lexicon::Category;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while assembling a lexicon from configured terms.
///
/// The built-in table never produces these; they only surface when a
/// deployment extends the lexicon through its configuration file.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A configured pattern is not a valid regular expression.
    #[error("invalid {category} pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Category the pattern was declared under.
        category: Category,
        /// The pattern source as written in the configuration.
        pattern: String,
        /// Underlying regex compilation error.
        #[source]
        source: Box<regex::Error>,
    },

    /// A configured entry has neither a term nor a pattern, or both are blank.
    #[error("{category} entry must set exactly one non-empty `term` or `pattern`")]
    EmptyTrigger {
        /// Category the entry was declared under.
        category: Category,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;
