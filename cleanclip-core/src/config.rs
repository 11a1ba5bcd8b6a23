//! Rule model for `cleanclip-core`.
//!
//! A `Rule` pairs a regular expression with the literal placeholder that
//! replaces its matches. A `RuleSet` is the ordered, non-empty list of rules
//! the engine applies top to bottom. Both are validated on construction and
//! immutable afterwards: editing means building a new value.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::errors::CleanclipError;
use crate::sanitizers::compiler::compile_pattern;

/// Plain `{pattern, placeholder}` record, the shape rules take on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleRecord {
    pub pattern: String,
    pub placeholder: String,
}

/// A single validated (pattern, placeholder) pair.
///
/// The compiled expression travels with the rule, so applying it can never
/// fail. Equality and hashing look at the pattern and placeholder text only.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "RuleRecord", into = "RuleRecord")]
pub struct Rule {
    pattern: String,
    placeholder: String,
    regex: Regex,
}

impl Rule {
    /// Validates a candidate pattern and placeholder.
    ///
    /// Both fields are trimmed first. Fails with `EmptyField` if either is
    /// blank, and with `InvalidPattern` if the pattern does not compile.
    pub fn new(pattern: &str, placeholder: &str) -> Result<Self, CleanclipError> {
        Self::from_exact(pattern.trim(), placeholder.trim())
    }

    /// Validates the fields exactly as given, without trimming.
    ///
    /// Used for quoted fields in rule text and for stored records, where
    /// leading or trailing whitespace is part of the rule.
    pub fn from_exact(pattern: &str, placeholder: &str) -> Result<Self, CleanclipError> {
        if pattern.is_empty() || placeholder.is_empty() {
            return Err(CleanclipError::EmptyField);
        }

        let regex = compile_pattern(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            placeholder: placeholder.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The compiled, multi-line expression for this rule.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Functional form of [`Rule::new`].
pub fn validate(pattern: &str, placeholder: &str) -> Result<Rule, CleanclipError> {
    Rule::new(pattern, placeholder)
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.placeholder == other.placeholder
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.placeholder.hash(state);
    }
}

impl TryFrom<RuleRecord> for Rule {
    type Error = CleanclipError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        Rule::from_exact(&record.pattern, &record.placeholder)
    }
}

impl From<Rule> for RuleRecord {
    fn from(rule: Rule) -> Self {
        RuleRecord {
            pattern: rule.pattern,
            placeholder: rule.placeholder,
        }
    }
}

/// Ordered, non-empty sequence of rules.
///
/// Order is significant: each rule runs over the output of the one before it.
/// No sorting or deduplication ever happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set, rejecting an empty list with `NoRulesProvided`.
    pub fn new(rules: Vec<Rule>) -> Result<Self, CleanclipError> {
        if rules.is_empty() {
            return Err(CleanclipError::NoRulesProvided);
        }
        Ok(Self { rules })
    }

    /// Loads the built-in rule set embedded in the library.
    ///
    /// Used only when no valid stored rule set exists.
    pub fn load_default_rules() -> Result<Self, CleanclipError> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let file: DefaultRulesFile = serde_yml::from_str(default_yaml)
            .map_err(|e| CleanclipError::Serialization(format!("Failed to parse default rules: {e}")))?;

        debug!("Loaded {} default rules.", file.rules.len());
        Ok(file.rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

impl TryFrom<Vec<Rule>> for RuleSet {
    type Error = CleanclipError;

    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        RuleSet::new(rules)
    }
}

impl From<RuleSet> for Vec<Rule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[derive(Debug, Deserialize)]
struct DefaultRulesFile {
    rules: RuleSet,
}
