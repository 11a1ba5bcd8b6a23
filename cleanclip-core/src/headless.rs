// File: cleanclip-core/src/headless.rs

//! `headless.rs`
//! One-shot sanitization for front ends that hand over a text blob which may
//! be missing (an empty clipboard, for instance) and need to tell the user
//! what happened.

use crate::config::RuleSet;
use crate::engine::{has_changes, sanitize};

/// The three mutually exclusive results a front end reports to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizeOutcome {
    /// No text was available to sanitize.
    NoText,
    /// At least one rule replaced something.
    Changed { sanitized: String },
    /// Rules ran but the text came out identical.
    Unchanged { sanitized: String },
}

impl SanitizeOutcome {
    /// The text to hand back to the caller, if there was any.
    pub fn sanitized(&self) -> Option<&str> {
        match self {
            SanitizeOutcome::NoText => None,
            SanitizeOutcome::Changed { sanitized } | SanitizeOutcome::Unchanged { sanitized } => {
                Some(sanitized)
            }
        }
    }
}

/// Sanitizes optional text and classifies the result.
pub fn sanitize_clipboard_text(text: Option<&str>, rules: &RuleSet) -> SanitizeOutcome {
    let Some(original) = text else {
        return SanitizeOutcome::NoText;
    };

    classify(original, sanitize(Some(original), rules))
}

/// Classifies an already-sanitized text against its original.
pub fn classify(original: &str, sanitized: String) -> SanitizeOutcome {
    if has_changes(original, &sanitized) {
        SanitizeOutcome::Changed { sanitized }
    } else {
        SanitizeOutcome::Unchanged { sanitized }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_reports_no_text() {
        let rules = RuleSet::load_default_rules().unwrap();
        assert_eq!(sanitize_clipboard_text(None, &rules), SanitizeOutcome::NoText);
        assert_eq!(SanitizeOutcome::NoText.sanitized(), None);
    }

    #[test]
    fn email_reports_changed() {
        let rules = RuleSet::load_default_rules().unwrap();
        let outcome = sanitize_clipboard_text(Some("mail me: jane@example.org"), &rules);
        assert_eq!(
            outcome,
            SanitizeOutcome::Changed { sanitized: "mail me: hidden@email.com".to_string() }
        );
    }

    #[test]
    fn plain_text_reports_unchanged() {
        let rules = RuleSet::load_default_rules().unwrap();
        let outcome = sanitize_clipboard_text(Some("nothing to see"), &rules);
        assert_eq!(outcome.sanitized(), Some("nothing to see"));
        assert!(matches!(outcome, SanitizeOutcome::Unchanged { .. }));
    }
}
