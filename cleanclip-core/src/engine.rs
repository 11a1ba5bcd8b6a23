// cleanclip-core/src/engine.rs
//! Defines the core `SanitizationEngine` trait and the free-function API.
//!
//! The trait keeps callers (the CLI, tests, future front ends) independent of
//! how matching is done. The free functions `sanitize` and `has_changes` are
//! the plain, stateless entry points.
//!
//! License: MIT OR APACHE 2.0

use crate::config::RuleSet;
use crate::engines::regex_engine::apply_rules;
use crate::redaction_match::RedactionSummaryItem;

/// A trait that defines the core functionality of a sanitization engine.
///
/// Implementations cannot fail: every rule they hold has already been
/// validated and compiled.
pub trait SanitizationEngine: Send + Sync {
    /// Applies every rule, in order, and returns the sanitized content.
    fn sanitize(&self, content: &str) -> String {
        self.sanitize_with_summary(content).0
    }

    /// Like `sanitize`, also reporting how many substitutions each rule made.
    ///
    /// Rules that replaced nothing are left out; the remaining items follow
    /// rule order.
    fn sanitize_with_summary(&self, content: &str) -> (String, Vec<RedactionSummaryItem>);

    /// Returns the rule set the engine applies.
    fn rules(&self) -> &RuleSet;
}

/// Sanitizes `text` with `rules`; absent text yields an empty string.
pub fn sanitize(text: Option<&str>, rules: &RuleSet) -> String {
    match text {
        Some(content) => apply_rules(content, rules).0,
        None => String::new(),
    }
}

/// True when sanitizing changed the text in any way.
pub fn has_changes(original: &str, sanitized: &str) -> bool {
    original != sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rule;

    fn digits() -> RuleSet {
        RuleSet::new(vec![Rule::new(r"\d+", "N").unwrap()]).unwrap()
    }

    #[test]
    fn absent_text_is_empty_output() {
        assert_eq!(sanitize(None, &digits()), "");
    }

    #[test]
    fn has_changes_is_plain_inequality() {
        assert!(has_changes("foo", "bar"));
        assert!(!has_changes("foo", "foo"));
        assert!(has_changes("foo", "foo "));
    }

    #[test]
    fn free_function_applies_rules() {
        assert_eq!(sanitize(Some("pin 1234"), &digits()), "pin N");
    }
}
