//! Colour theme for CLI output.
//!
//! Each kind of message maps to one of the 16 ANSI colours. A theme can be
//! loaded from a YAML file; entries the file leaves out keep their defaults.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    Header,
    Success,
    Info,
    Warn,
    Error,
    DiffAdded,
    DiffRemoved,
    DiffHeader,
    SummaryRuleName,
    SummaryOccurrences,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 10] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::DiffAdded,
        ThemeEntry::DiffRemoved,
        ThemeEntry::DiffHeader,
        ThemeEntry::SummaryRuleName,
        ThemeEntry::SummaryOccurrences,
    ];

    fn default_color(self) -> ThemeColor {
        match self {
            ThemeEntry::Success | ThemeEntry::DiffAdded => ThemeColor::Green,
            ThemeEntry::Warn | ThemeEntry::DiffHeader => ThemeColor::Yellow,
            ThemeEntry::Error | ThemeEntry::DiffRemoved => ThemeColor::Red,
            ThemeEntry::SummaryRuleName => ThemeColor::Cyan,
            ThemeEntry::SummaryOccurrences => ThemeColor::BrightWhite,
            ThemeEntry::Header | ThemeEntry::Info => ThemeColor::White,
        }
    }
}

/// One of the 16 named ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color '{}'; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, or their bright variants (e.g. brightred).",
            self.0
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s.to_lowercase().as_str() {
            "black" => ThemeColor::Black,
            "red" => ThemeColor::Red,
            "green" => ThemeColor::Green,
            "yellow" => ThemeColor::Yellow,
            "blue" => ThemeColor::Blue,
            "magenta" => ThemeColor::Magenta,
            "cyan" => ThemeColor::Cyan,
            "white" => ThemeColor::White,
            "brightblack" => ThemeColor::BrightBlack,
            "brightred" => ThemeColor::BrightRed,
            "brightgreen" => ThemeColor::BrightGreen,
            "brightyellow" => ThemeColor::BrightYellow,
            "brightblue" => ThemeColor::BrightBlue,
            "brightmagenta" => ThemeColor::BrightMagenta,
            "brightcyan" => ThemeColor::BrightCyan,
            "brightwhite" => ThemeColor::BrightWhite,
            _ => return Err(ParseThemeColorError(s.to_string())),
        };
        Ok(color)
    }
}

impl ThemeColor {
    /// Converts to the matching `owo_colors::AnsiColors`.
    pub fn to_ansi_color(self) -> AnsiColors {
        match self {
            ThemeColor::Black => AnsiColors::Black,
            ThemeColor::Red => AnsiColors::Red,
            ThemeColor::Green => AnsiColors::Green,
            ThemeColor::Yellow => AnsiColors::Yellow,
            ThemeColor::Blue => AnsiColors::Blue,
            ThemeColor::Magenta => AnsiColors::Magenta,
            ThemeColor::Cyan => AnsiColors::Cyan,
            ThemeColor::White => AnsiColors::White,
            ThemeColor::BrightBlack => AnsiColors::BrightBlack,
            ThemeColor::BrightRed => AnsiColors::BrightRed,
            ThemeColor::BrightGreen => AnsiColors::BrightGreen,
            ThemeColor::BrightYellow => AnsiColors::BrightYellow,
            ThemeColor::BrightBlue => AnsiColors::BrightBlue,
            ThemeColor::BrightMagenta => AnsiColors::BrightMagenta,
            ThemeColor::BrightCyan => AnsiColors::BrightCyan,
            ThemeColor::BrightWhite => AnsiColors::BrightWhite,
        }
    }
}

/// Style applied to one `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

/// Loads a theme from `theme_path`, or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

impl ThemeStyle {
    /// Reads a YAML theme and fills in every entry it does not mention.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut theme: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            theme.entry(entry).or_insert(style);
        }
        Ok(theme)
    }

    pub fn default_theme_map() -> ThemeMap {
        ThemeEntry::ALL
            .into_iter()
            .map(|entry| (entry, ThemeStyle { fg: Some(entry.default_color()) }))
            .collect()
    }
}
