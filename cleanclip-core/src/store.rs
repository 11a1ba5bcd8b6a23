//! Rule storage boundary.
//!
//! The core never touches the filesystem. Front ends implement `RuleStore`
//! and reuse `decode_stored_rules` / `encode_stored_rules` for the persisted
//! JSON shape: a list of `{"pattern": ..., "placeholder": ...}` records.
//!
//! License: MIT OR Apache-2.0

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;

use crate::config::{Rule, RuleSet};
use crate::errors::CleanclipError;

/// Load/save contract for a persisted rule set.
pub trait RuleStore {
    /// Returns the stored rule set, or the defaults if nothing valid is stored.
    ///
    /// Never returns an empty set. When falling back, implementations try to
    /// persist the defaults so the next load finds them.
    fn load_rule_set(&self) -> Result<RuleSet, CleanclipError>;

    /// Replaces the stored rule set as a whole.
    fn save_rule_set(&self, rules: &RuleSet) -> Result<(), CleanclipError>;
}

/// Decodes the persisted JSON document.
///
/// Returns `None` for invalid JSON, a non-list document, or a list without a
/// single usable entry. Unusable entries inside a list are skipped.
pub fn decode_stored_rules(document: &str) -> Option<RuleSet> {
    let value: Value = match serde_json::from_str(document) {
        Ok(value) => value,
        Err(e) => {
            warn!("Stored rules are not valid JSON: {}", e);
            return None;
        }
    };

    let Value::Array(entries) = value else {
        warn!("Stored rules document is not a list.");
        return None;
    };

    let total = entries.len();
    let rules: Vec<Rule> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Rule>(entry) {
            Ok(rule) => Some(rule),
            Err(e) => {
                warn!("Skipping stored rule #{}: {}", index + 1, e);
                None
            }
        })
        .collect();

    debug!("Decoded {} of {} stored rules.", rules.len(), total);
    RuleSet::new(rules).ok()
}

/// Encodes a rule set as pretty-printed JSON with two-space indentation.
pub fn encode_stored_rules(rules: &RuleSet) -> Result<String, CleanclipError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    rules
        .serialize(&mut serializer)
        .map_err(|e| CleanclipError::Serialization(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| CleanclipError::Serialization(e.to_string()))
}

/// Shared load logic: decode `document` or fall back to the defaults.
///
/// `reseed` is called with the defaults whenever a fallback happens; its
/// failure is logged and does not fail the load.
pub fn load_or_seed<F>(document: Option<&str>, reseed: F) -> Result<RuleSet, CleanclipError>
where
    F: FnOnce(&RuleSet) -> Result<(), CleanclipError>,
{
    if let Some(rules) = document.and_then(decode_stored_rules) {
        return Ok(rules);
    }

    debug!("No valid stored rules; seeding defaults.");
    let defaults = RuleSet::load_default_rules()?;
    if let Err(e) = reseed(&defaults) {
        warn!("Failed to persist default rules: {}", e);
    }
    Ok(defaults)
}

/// In-memory `RuleStore` holding the encoded JSON document.
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    document: Mutex<Option<String>>,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a raw stored document, valid or not.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
        }
    }

    /// The raw document currently held, if any.
    pub fn document(&self) -> Option<String> {
        self.document.lock().ok().and_then(|guard| guard.clone())
    }

    fn write(&self, encoded: String) -> Result<(), CleanclipError> {
        let mut guard = self
            .document
            .lock()
            .map_err(|e| CleanclipError::Storage(e.to_string()))?;
        *guard = Some(encoded);
        Ok(())
    }
}

impl RuleStore for MemoryRuleStore {
    fn load_rule_set(&self) -> Result<RuleSet, CleanclipError> {
        let document = self.document();
        load_or_seed(document.as_deref(), |defaults| self.save_rule_set(defaults))
    }

    fn save_rule_set(&self, rules: &RuleSet) -> Result<(), CleanclipError> {
        self.write(encode_stored_rules(rules)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_valid_entries_in_order() {
        let doc = r#"[
            {"pattern": "b", "placeholder": "B"},
            {"pattern": "a"},
            "junk",
            {"pattern": "(", "placeholder": "X"},
            {"pattern": "a", "placeholder": "A"}
        ]"#;
        let rules = decode_stored_rules(doc).unwrap();
        let patterns: Vec<&str> = rules.iter().map(Rule::pattern).collect();
        assert_eq!(patterns, vec!["b", "a"]);
    }

    #[test]
    fn decode_rejects_bad_documents() {
        assert!(decode_stored_rules("{not json").is_none());
        assert!(decode_stored_rules(r#"{"pattern": "a", "placeholder": "b"}"#).is_none());
        assert!(decode_stored_rules("[]").is_none());
        assert!(decode_stored_rules(r#"[{"placeholder": "b"}]"#).is_none());
    }

    #[test]
    fn encode_uses_two_space_indent_and_keeps_unicode() {
        let rules = RuleSet::new(vec![Rule::new("ü+", "ß").unwrap()]).unwrap();
        let encoded = encode_stored_rules(&rules).unwrap();
        assert!(encoded.contains("\n  {\n    \"pattern\": \"ü+\""));
        assert!(encoded.contains("\"placeholder\": \"ß\""));
    }
}
