//! Module for managing the colours of `wordll`'s console output.
//!
//! A theme maps each logical output element (section headers, report
//! headers, bucket labels, messages) to an optional 16-colour ANSI
//! foreground. Themes can be loaded from a YAML file; entries the file does
//! not mention keep their default style.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use anyhow::{Context, Result};
use comfy_table::Color as TableColor;
use owo_colors::AnsiColors;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Banner printed once before all reports.
    SectionHeader,
    /// The `--- average word log likelihood by ...` line of each report.
    ReportHeader,
    /// Bucket labels at the start of each report row.
    BucketLabel,
    /// The marker shown for buckets without data.
    Undefined,
    /// Per-profile failure messages on stderr.
    Error,
}

const ALL_ENTRIES: [ThemeEntry; 5] = [
    ThemeEntry::SectionHeader,
    ThemeEntry::ReportHeader,
    ThemeEntry::BucketLabel,
    ThemeEntry::Undefined,
    ThemeEntry::Error,
];

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the `ThemeColor` into its `owo_colors::AnsiColors` counterpart.
    /// Unknown names (possible when a theme file bypasses `FromStr`) render white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }

    /// The same colour for `comfy-table` cells.
    pub fn to_table_color(&self) -> TableColor {
        match self.to_ansi_color() {
            AnsiColors::Black => TableColor::Black,
            AnsiColors::Red => TableColor::DarkRed,
            AnsiColors::Green => TableColor::DarkGreen,
            AnsiColors::Yellow => TableColor::DarkYellow,
            AnsiColors::Blue => TableColor::DarkBlue,
            AnsiColors::Magenta => TableColor::DarkMagenta,
            AnsiColors::Cyan => TableColor::DarkCyan,
            AnsiColors::White => TableColor::Grey,
            AnsiColors::BrightBlack => TableColor::DarkGrey,
            AnsiColors::BrightRed => TableColor::Red,
            AnsiColors::BrightGreen => TableColor::Green,
            AnsiColors::BrightYellow => TableColor::Yellow,
            AnsiColors::BrightBlue => TableColor::Blue,
            AnsiColors::BrightMagenta => TableColor::Magenta,
            AnsiColors::BrightCyan => TableColor::Cyan,
            _ => TableColor::White,
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&Path>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    fn fg(name: &str) -> Self {
        ThemeStyle { fg: Some(ThemeColor::named(name)) }
    }

    /// Loads a theme from a YAML file on disk and fills in missing entries from the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::SectionHeader, Self::fg("brightcyan"));
        default_theme.insert(ThemeEntry::ReportHeader, Self::fg("cyan"));
        default_theme.insert(ThemeEntry::Undefined, Self::fg("brightblack"));
        default_theme.insert(ThemeEntry::Error, Self::fg("red"));

        for entry in ALL_ENTRIES {
            default_theme.entry(entry).or_insert_with(|| Self::fg("white"));
        }
        default_theme
    }
}
