//! Command implementations invoked from `main`.

pub mod cleanclip;
pub mod rules;
