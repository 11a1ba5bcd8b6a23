// cleanclip-core/src/redaction_match.rs
//! Per-rule redaction reporting and PII-safe debug logging.
//!
//! Matched values never reach the logs verbatim unless
//! `CLEANCLIP_ALLOW_DEBUG_PII=true` is set in the environment.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Read once: whether original matched values may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("CLEANCLIP_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// How many substitutions one rule performed during a sanitize call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummaryItem {
    pub pattern: String,
    pub placeholder: String,
    pub occurrences: usize,
}

/// Masks a sensitive value for display, keeping only its length for long values.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_redaction_action_debug(
    module_path: &str,
    original_sensitive_content: &str,
    placeholder: &str,
    pattern: &str,
) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}' for pattern '{}'",
        module_path,
        get_loggable_content(original_sensitive_content),
        placeholder,
        pattern
    );
}

pub fn log_protected_match_debug(module_path: &str, protected_value: &str, pattern: &str) {
    debug!(
        "{} Kept protected placeholder '{}' matched by pattern '{}'",
        module_path, protected_value, pattern
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }
}
