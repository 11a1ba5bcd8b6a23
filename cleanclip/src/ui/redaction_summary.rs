//! Table of what each rule replaced during a run.

use anyhow::Result;
use cleanclip_core::RedactionSummaryItem;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

use crate::ui::output_format::write_styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

pub fn print_summary<W: Write>(
    summary: &[RedactionSummaryItem],
    writer: &mut W,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    write_styled(writer, "Redaction Summary:", ThemeEntry::Header, theme_map, use_color)?;
    writeln!(writer)?;

    if summary.is_empty() {
        writeln!(writer, "No redactions applied.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Pattern", "Placeholder", "Occurrences"]);
    for item in summary {
        table.add_row(vec![
            Cell::new(&item.pattern),
            Cell::new(&item.placeholder),
            Cell::new(item.occurrences),
        ]);
    }
    writeln!(writer, "{table}")?;
    Ok(())
}
