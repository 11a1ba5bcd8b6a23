// cleanclip/src/ui/diff_viewer.rs
//! Line diff between the original and the sanitized text.
//!
//! Removed lines are prefixed `-`, added lines `+`, unchanged context lines
//! two spaces, each coloured from the theme.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use std::io::Write;

use crate::ui::output_format::write_styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

pub fn print_diff<W: Write>(
    original: &str,
    sanitized: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    write_styled(writer, "--- Diff Analysis ---", ThemeEntry::DiffHeader, theme_map, use_color)?;
    writeln!(writer)?;

    let patch = create_patch(original, sanitized);
    if patch.hunks().is_empty() {
        writeln!(writer, "No changes detected.")?;
        return Ok(());
    }

    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    write_styled(writer, &format!("- {}", s.trim_end_matches('\n')), ThemeEntry::DiffRemoved, theme_map, use_color)?;
                }
                DiffLine::Insert(s) => {
                    write_styled(writer, &format!("+ {}", s.trim_end_matches('\n')), ThemeEntry::DiffAdded, theme_map, use_color)?;
                }
                DiffLine::Context(s) => {
                    write!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
            writeln!(writer)?;
        }
    }

    Ok(())
}
