//! compiler.rs - Compiles rule patterns into regular expressions.
//!
//! Every pattern is compiled with multi-line mode enabled, so `^` and `$`
//! match at line boundaries. Compilation happens once, when a `Rule` is
//! validated; the engine only ever sees already-compiled expressions.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::CleanclipError;

/// Upper bound on the compiled program size of a single pattern.
pub const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiles `pattern` the way every rule is matched: global, multi-line.
///
/// The compiler diagnostic is kept verbatim in the returned
/// `CleanclipError::InvalidPattern` so it can be shown to the user.
pub fn compile_pattern(pattern: &str) -> Result<Regex, CleanclipError> {
    debug!("Attempting to compile pattern '{:?}'", pattern);

    RegexBuilder::new(pattern)
        .multi_line(true)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| CleanclipError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}
