//! Command-line interface definition for the `cleanclip` binary.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cleanclip",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrub sensitive data from the clipboard",
    long_about = "CleanClip replaces emails, card-like numbers and any pattern you define with fixed placeholders. By default it sanitizes the clipboard in place; rules are kept in ~/.cleanclip/patterns.json and edited in a simple `pattern -> placeholder` text format.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Directory holding patterns.json (defaults to ~/.cleanclip).
    #[arg(long = "config-dir", value_name = "DIR", env = "CLEANCLIP_CONFIG_DIR", global = true, help = "Directory holding the stored rules (defaults to ~/.cleanclip).")]
    pub config_dir: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cleanclip` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes the clipboard (or a file / stdin), replacing sensitive data with placeholders.
    #[command(about = "Sanitizes the clipboard (or a file / stdin), replacing sensitive data with placeholders.")]
    Sanitize(SanitizeCommand),

    /// Shows, imports, edits or resets the stored rules.
    #[command(subcommand, about = "Shows, imports, edits or resets the stored rules.")]
    Rules(RulesCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Read input from a file instead of the clipboard.
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "stdin", help = "Read input from a file instead of the clipboard.")]
    pub input_file: Option<PathBuf>,

    /// Read input from stdin instead of the clipboard.
    #[arg(long, help = "Read input from stdin instead of the clipboard.")]
    pub stdin: bool,

    /// Write sanitized output to this file instead of stdout (file / stdin input only).
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a file instead of stdout (file or stdin input only).")]
    pub output: Option<PathBuf>,

    /// Also copy the sanitized output to the clipboard (file / stdin input only).
    #[arg(long, short = 'c', help = "Also copy the sanitized output to the clipboard.")]
    pub copy: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a diff of the changes made.")]
    pub diff: bool,

    /// Use rules from a text file (`pattern -> placeholder` lines) instead of the stored rules.
    #[arg(long = "rules", value_name = "FILE", help = "Use rules from a `pattern -> placeholder` text file instead of the stored rules.")]
    pub rules: Option<PathBuf>,

    /// Suppress the redaction summary.
    #[arg(long = "no-redaction-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

/// Subcommands for the `rules` command.
#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    #[command(about = "Prints the stored rules in the editable text format.")]
    Show,
    #[command(about = "Replaces the stored rules with those in a text file, if the file is valid.")]
    Import {
        /// Text file with one `pattern -> placeholder` rule per line.
        #[arg(value_name = "FILE", help = "Text file with one `pattern -> placeholder` rule per line.")]
        path: PathBuf,
    },
    #[command(about = "Opens the stored rules in $VISUAL / $EDITOR and saves them if they are valid.")]
    Edit,
    #[command(about = "Restores the built-in default rules.")]
    Reset,
    #[command(about = "Prints the location of the rules file.")]
    Path,
}
