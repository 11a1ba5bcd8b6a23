//! `sanitize` command: run the rule set over the clipboard, a file or stdin.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use cleanclip_core::{classify, RedactionSummaryItem, SanitizationEngine, SanitizeOutcome};
use is_terminal::IsTerminal;

use crate::ui::diff_viewer;
use crate::ui::output_format;
use crate::ui::redaction_summary;
use crate::ui::theme::ThemeMap;
use crate::utils::clipboard::{copy_to_clipboard, read_clipboard_text};

pub const NO_TEXT_MESSAGE: &str = "No text data was found on the clipboard.";
pub const CHANGED_MESSAGE: &str = "Sensitive data was replaced with placeholders.";
pub const UNCHANGED_MESSAGE: &str = "No sensitive data was detected.";

/// Where the text to sanitize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from the clipboard and write the result back to it.
    Clipboard,
    Stdin,
    File(PathBuf),
}

/// Options for the ergonomic run_cleanclip_opts API
#[derive(Debug, Clone)]
pub struct CleanclipOptions {
    pub source: InputSource,
    pub output_path: Option<PathBuf>,
    pub copy: bool,
    pub diff: bool,
    pub no_redaction_summary: bool,
    pub quiet: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let use_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, use_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let use_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, use_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let use_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, use_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let use_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, use_color);
}

/// Runs one sanitize operation and reports which of the three outcomes occurred.
pub fn run_cleanclip_opts(
    engine: &dyn SanitizationEngine,
    opts: &CleanclipOptions,
    theme_map: &ThemeMap,
) -> Result<SanitizeOutcome> {
    info!("Starting cleanclip operation.");

    let Some(original) = read_input(&opts.source)? else {
        report_status(&SanitizeOutcome::NoText, opts.quiet, theme_map);
        return Ok(SanitizeOutcome::NoText);
    };

    let (sanitized, summary) = engine.sanitize_with_summary(&original);
    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        original.len(),
        sanitized.len()
    );

    handle_primary_output(opts, &original, &sanitized, theme_map)?;

    if opts.copy && opts.source != InputSource::Clipboard {
        match copy_to_clipboard(&sanitized) {
            Ok(()) => info_msg("Sanitized content copied to clipboard successfully.", theme_map),
            Err(e) => warn_msg(format!("Failed to copy to clipboard: {e:#}"), theme_map),
        }
    }

    let outcome = classify(&original, sanitized);
    report_status(&outcome, opts.quiet, theme_map);

    handle_redaction_summary(&summary, opts, theme_map)?;

    info!("Cleanclip operation completed.");
    Ok(outcome)
}

/// How a status line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Warn,
    Success,
    Info,
}

/// The status line for `outcome`, or `None` in quiet mode.
pub fn status_message(outcome: &SanitizeOutcome, quiet: bool) -> Option<(StatusKind, &'static str)> {
    if quiet {
        return None;
    }
    Some(match outcome {
        SanitizeOutcome::NoText => (StatusKind::Warn, NO_TEXT_MESSAGE),
        SanitizeOutcome::Changed { .. } => (StatusKind::Success, CHANGED_MESSAGE),
        SanitizeOutcome::Unchanged { .. } => (StatusKind::Info, UNCHANGED_MESSAGE),
    })
}

fn report_status(outcome: &SanitizeOutcome, quiet: bool, theme_map: &ThemeMap) {
    match status_message(outcome, quiet) {
        Some((StatusKind::Warn, msg)) => warn_msg(msg, theme_map),
        Some((StatusKind::Success, msg)) => success_msg(msg, theme_map),
        Some((StatusKind::Info, msg)) => info_msg(msg, theme_map),
        None => {}
    }
}

fn read_input(source: &InputSource) -> Result<Option<String>> {
    match source {
        InputSource::Clipboard => read_clipboard_text(),
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(Some(buffer))
        }
        InputSource::File(path) => fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
    }
}

fn handle_primary_output(
    opts: &CleanclipOptions,
    original: &str,
    sanitized: &str,
    theme_map: &ThemeMap,
) -> Result<()> {
    if opts.source == InputSource::Clipboard {
        // The clipboard is always rewritten, even when nothing changed.
        copy_to_clipboard(sanitized)?;
        if opts.diff {
            let stdout = io::stdout();
            let use_color = stdout.is_terminal();
            diff_viewer::print_diff(original, sanitized, &mut stdout.lock(), theme_map, use_color)?;
        }
        return Ok(());
    }

    if let Some(path) = &opts.output_path {
        info_msg(format!("Writing sanitized content to file: {}", path.display()), theme_map);
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        if opts.diff {
            diff_viewer::print_diff(original, sanitized, &mut file, theme_map, false)?;
        } else {
            file.write_all(sanitized.as_bytes())?;
        }
    } else {
        let stdout = io::stdout();
        let use_color = stdout.is_terminal();
        let mut writer = stdout.lock();

        if opts.diff {
            diff_viewer::print_diff(original, sanitized, &mut writer, theme_map, use_color)?;
        } else {
            writer.write_all(sanitized.as_bytes())?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn handle_redaction_summary(
    summary: &[RedactionSummaryItem],
    opts: &CleanclipOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    if !opts.no_redaction_summary && !opts.quiet {
        let use_color = io::stderr().is_terminal();
        redaction_summary::print_summary(summary, &mut io::stderr(), theme_map, use_color)?;
    }
    Ok(())
}
