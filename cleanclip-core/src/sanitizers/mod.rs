//! Pattern compilation for CleanClip rules.
//!
//! Rules are compiled once, at validation time, so that applying a rule set
//! to text can never fail on a bad pattern.

pub mod compiler;
