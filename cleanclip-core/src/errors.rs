//! errors.rs - Custom error types for the cleanclip-core library.
//!
//! Every fallible step in the core (building a rule, parsing the editable rule
//! text, encoding stored rules) reports through `CleanclipError`. The engine
//! itself never fails once a `RuleSet` exists.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `cleanclip-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanclipError {
    #[error("Pattern and placeholder cannot be empty.")]
    EmptyField,

    #[error("Invalid regular expression '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Each non-comment line must contain '->' separating pattern and placeholder: '{line}'")]
    MissingSeparator { line: String },

    #[error("At least one pattern must be provided.")]
    NoRulesProvided,

    #[error("Failed to serialize rules: {0}")]
    Serialization(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rule storage failed: {0}")]
    Storage(String),
}

/// Convenience alias used throughout the core.
pub type Result<T, E = CleanclipError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_message_names_pattern_and_diagnostic() {
        let err = CleanclipError::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("'('"));
        assert!(text.contains("unclosed group"));
    }

    #[test]
    fn missing_separator_message_includes_line() {
        let err = CleanclipError::MissingSeparator { line: "abc".to_string() };
        assert!(err.to_string().contains("'abc'"));
    }
}
