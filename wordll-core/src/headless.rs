// File: wordll-core/src/headless.rs

//! `headless.rs`
//! One-shot report generation for non-interactive callers.
//!
//! Wires the pieces together for a single profile: load the profile's label
//! corpus if it names one, build the bucketer, aggregate every system and
//! assemble the report.

use log::{debug, info};

use crate::aggregate::aggregate_systems;
use crate::bucketer::{check_profile, create_word_bucketer};
use crate::config::BucketProfile;
use crate::corpus::{load_tokens, LikelihoodCorpus, TokenCorpus};
use crate::errors::Result;
use crate::report::LikelihoodReport;

/// Column names used when the caller does not name its systems: `sys1`, `sys2`, ...
pub fn default_system_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("sys{}", i)).collect()
}

/// Builds the report for one profile.
///
/// # Arguments
///
/// * `reference` - The reference words.
/// * `systems` - One likelihood corpus per evaluated system.
/// * `system_names` - Column names, one per system.
/// * `profile` - The bucketing profile; its `label_corpus`, if any, is read from disk.
pub fn generate_report(
    reference: &TokenCorpus,
    systems: &[LikelihoodCorpus],
    system_names: &[String],
    profile: &BucketProfile,
) -> Result<LikelihoodReport> {
    check_profile(profile)?;
    let labels = match &profile.label_corpus {
        Some(path) => Some(load_tokens(path)?),
        None => None,
    };
    generate_report_with_labels(reference, systems, system_names, profile, labels.as_ref())
}

/// Same as [`generate_report`], with the label corpus supplied by the caller.
pub fn generate_report_with_labels(
    reference: &TokenCorpus,
    systems: &[LikelihoodCorpus],
    system_names: &[String],
    profile: &BucketProfile,
    labels: Option<&TokenCorpus>,
) -> Result<LikelihoodReport> {
    info!("Generating {} report for {} systems.", profile.bucket_type, systems.len());

    let bucketer = create_word_bucketer(profile, labels)?;
    let results = aggregate_systems(reference, systems, bucketer.as_ref(), labels)?;
    let report = LikelihoodReport::assemble(bucketer.name(), bucketer.bucket_labels(), system_names, &results)?;

    debug!("Report assembled with {} rows.", report.rows.len());
    Ok(report)
}
