//! `rules` subcommands: show, import, edit, reset and path.
//!
//! An edit is committed only once the whole text parses; on any error the
//! stored rules are left exactly as they were.

use anyhow::{Context, Result};
use cleanclip_core::{parse, serialize, RuleSet, RuleStore};
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::utils::editor::edit_text;
use crate::utils::rule_store::JsonFileStore;

pub const DRAFT_FILE_NAME: &str = "patterns.edit.txt";

/// Writes the stored rules in the editable text format.
pub fn show_rules<S: RuleStore, W: Write>(store: &S, writer: &mut W) -> Result<()> {
    let rules = store.load_rule_set().context("Failed to load rules")?;
    writeln!(writer, "{}", serialize(&rules))?;
    Ok(())
}

/// Parses `text` and, only if it is valid, replaces the stored rules with it.
pub fn commit_rules_text<S: RuleStore>(store: &S, text: &str) -> Result<RuleSet> {
    let rules = parse(text).context("Rules were not saved")?;
    store.save_rule_set(&rules).context("Failed to save rules")?;
    info!("Committed {} rules.", rules.len());
    Ok(rules)
}

pub fn import_rules<S: RuleStore>(store: &S, path: &Path) -> Result<RuleSet> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    commit_rules_text(store, &text)
}

/// Opens the stored rules in the user's editor and commits the result.
pub fn edit_rules(store: &JsonFileStore) -> Result<RuleSet> {
    let current = store.load_rule_set().context("Failed to load rules")?;
    let draft_path = store.dir().join(DRAFT_FILE_NAME);
    let edited = edit_text(&serialize(&current), &draft_path)?;
    commit_rules_text(store, &edited)
}

/// Restores the built-in defaults.
pub fn reset_rules<S: RuleStore>(store: &S) -> Result<RuleSet> {
    let defaults = RuleSet::load_default_rules().context("Failed to load default rules")?;
    store.save_rule_set(&defaults).context("Failed to save rules")?;
    Ok(defaults)
}
