//! Editable text form of a rule set.
//!
//! One rule per line as `pattern -> placeholder`, with `#` comment lines and
//! blank lines ignored. Wrapping quotes are stripped, which is how a field
//! keeps leading or trailing whitespace. `serialize` and `parse` round-trip
//! any rule set whose fields contain no newlines and do not themselves start
//! or end with a quote.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::fmt;
use std::str::FromStr;

use crate::config::{Rule, RuleSet};
use crate::errors::CleanclipError;

/// Separator between pattern and placeholder on a rule line.
pub const SEPARATOR: &str = "->";

/// Fixed header written at the top of every serialized rule set.
pub const HEADER_LINES: [&str; 2] = [
    "# One pattern per line using the format: <regex> -> <placeholder>",
    "# Lines starting with # are ignored.",
];

const QUOTE_CHARS: [char; 2] = ['\'', '"'];

/// Renders `rules` in the editable line format, preserving order.
pub fn serialize(rules: &RuleSet) -> String {
    let mut lines: Vec<String> = HEADER_LINES.iter().map(|line| line.to_string()).collect();
    for rule in rules {
        lines.push(format!(
            "{} {} {}",
            quote_if_padded(rule.pattern()),
            SEPARATOR,
            quote_if_padded(rule.placeholder())
        ));
    }
    lines.join("\n")
}

/// Wraps a field with leading or trailing whitespace in single quotes so
/// `parse` gives it back unchanged.
fn quote_if_padded(field: &str) -> String {
    if field.trim() != field {
        format!("'{field}'")
    } else {
        field.to_string()
    }
}

/// Parses the editable line format back into a rule set.
///
/// Stops at the first bad line. A document with no rule lines at all fails
/// with `NoRulesProvided`.
pub fn parse(text: &str) -> Result<RuleSet, CleanclipError> {
    let mut rules = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (pattern_part, placeholder_part) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| CleanclipError::MissingSeparator { line: line.to_string() })?;

        let pattern_part = pattern_part.trim();
        let placeholder_part = placeholder_part.trim();
        if pattern_part.is_empty() || placeholder_part.is_empty() {
            return Err(CleanclipError::EmptyField);
        }

        let rule = Rule::from_exact(
            pattern_part.trim_matches(&QUOTE_CHARS[..]),
            placeholder_part.trim_matches(&QUOTE_CHARS[..]),
        )?;
        rules.push(rule);
    }

    debug!("Parsed {} rules from editable text.", rules.len());
    RuleSet::new(rules)
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

impl FromStr for RuleSet {
    type Err = CleanclipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
