//! Round trip through the user's text editor.
//!
//! The text is written to a draft file, `$VISUAL` or `$EDITOR` is run on it,
//! and the edited contents are read back. The draft is removed afterwards.

use anyhow::{bail, Context, Result};
use log::debug;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

#[cfg(windows)]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const FALLBACK_EDITOR: &str = "vi";

/// The editor command line, split on whitespace (e.g. `code --wait`).
pub fn editor_command() -> Vec<String> {
    let raw = env::var("VISUAL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string());
    raw.split_whitespace().map(str::to_string).collect()
}

/// Opens `initial` in the editor using `draft_path` and returns the edited text.
pub fn edit_text(initial: &str, draft_path: &Path) -> Result<String> {
    if let Some(parent) = draft_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(draft_path, initial)
        .with_context(|| format!("Failed to write draft {}", draft_path.display()))?;

    let result = run_editor(draft_path).and_then(|_| {
        fs::read_to_string(draft_path)
            .with_context(|| format!("Failed to read draft {}", draft_path.display()))
    });

    if let Err(e) = fs::remove_file(draft_path) {
        debug!("Could not remove draft {}: {}", draft_path.display(), e);
    }
    result
}

fn run_editor(draft_path: &Path) -> Result<()> {
    let command = editor_command();
    let Some((program, args)) = command.split_first() else {
        bail!("No editor configured; set $EDITOR");
    };

    debug!("Launching editor '{}' on {}", program, draft_path.display());
    let status = Command::new(program)
        .args(args)
        .arg(draft_path)
        .status()
        .with_context(|| format!("Failed to launch editor '{program}'"))?;

    if !status.success() {
        bail!("Editor '{program}' exited with {status}; changes were not saved");
    }
    Ok(())
}
