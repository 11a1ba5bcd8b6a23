// cleanclip-core/src/lib.rs
//! # CleanClip Core Library
//!
//! `cleanclip-core` holds the platform-independent part of CleanClip: the rule
//! model, the editable rule syntax and the ordered sanitization engine. It does
//! no I/O; clipboards, files and editors belong to the front end.
//!
//! ## Modules
//!
//! * `config`: `Rule` and `RuleSet`, validation, and the built-in default rules.
//! * `codec`: the `pattern -> placeholder` text form used to edit rules.
//! * `engine`: the `SanitizationEngine` trait plus `sanitize` / `has_changes`.
//! * `engines`: concrete engines (`RegexEngine`).
//! * `headless`: one-shot sanitization that classifies the outcome for display.
//! * `store`: the `RuleStore` boundary and the persisted JSON shape.
//! * `redaction_match`: per-rule summaries and PII-safe debug logging.
//! * `sanitizers`: pattern compilation.
//! * `errors`: the `CleanclipError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use cleanclip_core::{has_changes, sanitize, RuleSet};
//!
//! let rules = RuleSet::load_default_rules().unwrap();
//! let input = "Payment info: 1234-5678-9012-3456";
//! let output = sanitize(Some(input), &rules);
//!
//! assert_eq!(output, "Payment info: XXXX-XXXX-XXXX-XXXX");
//! assert!(has_changes(input, &output));
//! ```
//!
//! ## Error Handling
//!
//! Building rules and parsing rule text return `CleanclipError`. Once a
//! `RuleSet` exists, sanitizing cannot fail.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod codec;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod redaction_match;
pub mod sanitizers;
pub mod store;

/// Re-exports the rule model.
pub use config::{validate, Rule, RuleRecord, RuleSet};

/// Re-exports the editable text codec.
pub use codec::{parse, serialize};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CleanclipError;

/// Re-exports the engine trait and the stateless entry points.
pub use engine::{has_changes, sanitize, SanitizationEngine};

pub use engines::regex_engine::RegexEngine;

pub use headless::{classify, sanitize_clipboard_text, SanitizeOutcome};

pub use redaction_match::{redact_sensitive, RedactionSummaryItem};

/// Re-exports the storage boundary.
pub use store::{
    decode_stored_rules, encode_stored_rules, load_or_seed, MemoryRuleStore, RuleStore,
};
