//! Assembling per-system bucket averages into one report.
//!
//! Rows are buckets in the bucketer's order, columns are systems in the
//! order they were given. Nothing is sorted or dropped: an empty bucket
//! stays in the table with an explicit "no data" marker.
//!
//! License: MIT OR Apache-2.0

use serde::Serialize;
use std::fmt::Write as _;

use crate::aggregate::BucketedResult;
use crate::errors::{LikelihoodError, Result};

/// Printed in place of an average for a bucket that received no words.
pub const UNDEFINED_MARKER: &str = "N/A";

/// Decimal precision applied to every printed average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimals: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self { decimals: 4 }
    }
}

impl NumberFormat {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    pub fn format(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{:.*}", self.decimals, v),
            None => UNDEFINED_MARKER.to_string(),
        }
    }
}

/// One bucket's averages across all systems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    /// One entry per system; `None` (JSON `null`) when the bucket is empty.
    pub averages: Vec<Option<f64>>,
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikelihoodReport {
    /// Name of the bucketing policy.
    pub bucketer: String,
    pub systems: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl LikelihoodReport {
    /// Lays per-system results side by side.
    ///
    /// # Arguments
    /// * `bucketer_name` - Policy name shown in the header.
    /// * `bucket_labels` - Row labels, in bucket order.
    /// * `system_names` - Column names, one per entry of `results`.
    /// * `results` - Aggregated results, each indexed like `bucket_labels`.
    pub fn assemble(
        bucketer_name: &str,
        bucket_labels: &[String],
        system_names: &[String],
        results: &[BucketedResult],
    ) -> Result<Self> {
        if system_names.len() != results.len() {
            return Err(LikelihoodError::alignment(format!(
                "{} system names given for {} systems",
                system_names.len(),
                results.len()
            )));
        }
        if let Some((idx, bad)) = results
            .iter()
            .enumerate()
            .find(|(_, r)| r.num_buckets() != bucket_labels.len())
        {
            return Err(LikelihoodError::alignment(format!(
                "system '{}' has {} buckets but the bucketer defines {}",
                system_names[idx],
                bad.num_buckets(),
                bucket_labels.len()
            )));
        }

        let rows = bucket_labels
            .iter()
            .enumerate()
            .map(|(bucket, label)| ReportRow {
                label: label.clone(),
                averages: results.iter().map(|r| r.stats()[bucket].mean()).collect(),
                counts: results.iter().map(|r| r.stats()[bucket].count).collect(),
            })
            .collect();

        Ok(Self {
            bucketer: bucketer_name.to_string(),
            systems: system_names.to_vec(),
            rows,
        })
    }

    pub fn header(&self) -> String {
        format!("--- average word log likelihood by {} bucket", self.bucketer)
    }

    /// Header line, then one tab-separated line per bucket: the label
    /// followed by one formatted average per system.
    pub fn render_text(&self, format: &NumberFormat) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header());
        for row in &self.rows {
            out.push_str(&row.label);
            for value in &row.averages {
                out.push('\t');
                out.push_str(&format.format(*value));
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
