// cleanclip/src/lib.rs
//! # CleanClip CLI
//!
//! Terminal front end for `cleanclip-core`: clipboard access, the JSON rule
//! store, the editor round trip and themed output.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
