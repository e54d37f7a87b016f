//! Rendering of reports and status messages for the console.
//!
//! Three report formats are supported: the tab-separated text report, a
//! boxed table built with `comfy-table`, and pretty-printed JSON. Colour is
//! applied to headers, bucket labels and the undefined marker, and only when
//! the caller says the target supports it, so piped text output stays
//! byte-for-byte parseable.

use anyhow::{Context, Result};
use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use std::io::Write;

use wordll_core::{LikelihoodReport, NumberFormat};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header line plus one tab-separated line per bucket.
    #[default]
    Text,
    /// A boxed table with one column per system.
    Table,
    /// A JSON array with one object per report.
    Json,
}

/// Applies the theme colour for `entry` to `text` when colour is supported.
pub fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

/// Prints the banner that precedes all reports of a run.
pub fn print_section_header<W: Write>(out: &mut W, title: &str, theme: &ThemeMap, supports_color: bool) -> Result<()> {
    let banner = format!("********************** {} ************************", title);
    writeln!(out, "{}", styled(&banner, ThemeEntry::SectionHeader, theme, supports_color))?;
    Ok(())
}

pub fn print_error_message<W: Write>(out: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> Result<()> {
    writeln!(out, "{}", styled(&format!("Error: {}", msg), ThemeEntry::Error, theme, supports_color))?;
    Ok(())
}

/// Formats one average, styling the undefined marker.
fn value_text(value: Option<f64>, number_format: &NumberFormat, theme: &ThemeMap, supports_color: bool) -> String {
    let text = number_format.format(value);
    match value {
        Some(_) => text,
        None => styled(&text, ThemeEntry::Undefined, theme, supports_color),
    }
}

/// Writes one report in text form: a coloured header, then the tab-separated rows.
pub fn write_text_report<W: Write>(
    out: &mut W,
    report: &LikelihoodReport,
    number_format: &NumberFormat,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    writeln!(out, "{}", styled(&report.header(), ThemeEntry::ReportHeader, theme, supports_color))?;
    for row in &report.rows {
        write!(out, "{}", styled(&row.label, ThemeEntry::BucketLabel, theme, supports_color))?;
        for value in &row.averages {
            write!(out, "\t{}", value_text(*value, number_format, theme, supports_color))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn themed_cell(text: String, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> Cell {
    let cell = Cell::new(text);
    if !supports_color {
        return cell;
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => cell.fg(color.to_table_color()),
        None => cell,
    }
}

/// Builds the `comfy-table` view of a report.
pub fn build_table(report: &LikelihoodReport, number_format: &NumberFormat, theme: &ThemeMap, supports_color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    if supports_color {
        table.enforce_styling();
    }

    let mut header = vec![format!("{} bucket", report.bucketer)];
    header.extend(report.systems.iter().cloned());
    table.set_header(header);

    for row in &report.rows {
        let mut cells = vec![themed_cell(row.label.clone(), ThemeEntry::BucketLabel, theme, supports_color)];
        cells.extend(row.averages.iter().map(|v| match v {
            Some(_) => Cell::new(number_format.format(*v)),
            None => themed_cell(number_format.format(None), ThemeEntry::Undefined, theme, supports_color),
        }));
        table.add_row(cells);
    }
    table
}

pub fn write_table_report<W: Write>(
    out: &mut W,
    report: &LikelihoodReport,
    number_format: &NumberFormat,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    writeln!(out, "{}", styled(&report.header(), ThemeEntry::ReportHeader, theme, supports_color))?;
    writeln!(out, "{}", build_table(report, number_format, theme, supports_color))?;
    Ok(())
}

/// Writes all reports as one JSON array.
pub fn write_json_reports<W: Write>(out: &mut W, reports: &[LikelihoodReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports).context("Failed to serialize reports to JSON")?;
    writeln!(out, "{}", json)?;
    Ok(())
}
