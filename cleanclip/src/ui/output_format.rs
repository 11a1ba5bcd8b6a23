//! Themed status messages written to a terminal stream.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes `text` in the colour configured for `entry`, or plain when
/// `use_color` is false or the entry has no colour.
pub fn write_styled<W: Write>(
    writer: &mut W,
    text: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    use_color: bool,
) -> io::Result<()> {
    let color = theme_map.get(&entry).and_then(|style| style.fg);
    match color {
        Some(color) if use_color => write!(writer, "{}", text.color(color.to_ansi_color())),
        _ => write!(writer, "{}", text),
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    use_color: bool,
) -> io::Result<()> {
    write_styled(writer, &format!("{prefix}{msg}"), entry, theme_map, use_color)?;
    writeln!(writer)
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Info, theme_map, use_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Success, theme_map, use_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", msg, ThemeEntry::Warn, theme_map, use_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_message(writer, "Error: ", msg, ThemeEntry::Error, theme_map, use_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_has_prefix_and_newline() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\n");
    }

    #[test]
    fn colored_output_wraps_in_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_success_message(&mut buf, "done", &theme, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("\u{1b}["));
        assert!(text.contains("done"));
    }
}
