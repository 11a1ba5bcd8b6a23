// cleanclip-core/src/engines/regex_engine.rs
//! A `SanitizationEngine` implementation that applies regex rules in order.
//!
//! Each rule performs a global substitution over the output of the previous
//! rule. A set of protected placeholder values, local to one call and shared
//! by every rule, stops a placeholder that was already emitted from being
//! replaced again when a later (or the same) pattern matches it.
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::Captures;
use std::collections::HashSet;

use crate::config::RuleSet;
use crate::engine::SanitizationEngine;
use crate::redaction_match::{
    log_protected_match_debug, log_redaction_action_debug, RedactionSummaryItem,
};

const MODULE: &str = "cleanclip_core::regex_engine";

#[derive(Debug, Clone)]
pub struct RegexEngine {
    rules: RuleSet,
}

impl RegexEngine {
    pub fn new(rules: RuleSet) -> Self {
        debug!("RegexEngine created with {} rules.", rules.len());
        Self { rules }
    }
}

impl SanitizationEngine for RegexEngine {
    fn sanitize_with_summary(&self, content: &str) -> (String, Vec<RedactionSummaryItem>) {
        apply_rules(content, &self.rules)
    }

    fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

/// Runs every rule over `content` in order.
///
/// The protected set is keyed by placeholder value, not by the raw matched
/// text, so two rules sharing a placeholder see each other's output as
/// protected.
pub(crate) fn apply_rules(content: &str, rules: &RuleSet) -> (String, Vec<RedactionSummaryItem>) {
    let mut sanitized = content.to_string();
    let mut protected_values: HashSet<String> = HashSet::new();
    let mut summary = Vec::new();

    for rule in rules {
        let placeholder = rule.placeholder();
        let mut occurrences = 0usize;

        sanitized = rule
            .regex()
            .replace_all(&sanitized, |caps: &Captures| {
                let value = &caps[0];
                if protected_values.contains(value) {
                    log_protected_match_debug(MODULE, value, rule.pattern());
                    return value.to_string();
                }
                log_redaction_action_debug(MODULE, value, placeholder, rule.pattern());
                protected_values.insert(placeholder.to_string());
                occurrences += 1;
                placeholder.to_string()
            })
            .into_owned();

        if occurrences > 0 {
            summary.push(RedactionSummaryItem {
                pattern: rule.pattern().to_string(),
                placeholder: placeholder.to_string(),
                occurrences,
            });
        }
    }

    debug!(
        "Sanitization finished. Original length: {}, Sanitized length: {}",
        content.len(),
        sanitized.len()
    );
    (sanitized, summary)
}
