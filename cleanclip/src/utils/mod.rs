//! Collaborators that touch the outside world: clipboard, rule file, editor.

pub mod clipboard;
pub mod editor;
pub mod rule_store;
