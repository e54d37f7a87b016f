// wordll-core/src/bucketer.rs
//! Defines the core WordBucketer trait and the factory that builds one from
//! a profile.
//!
//! The `WordBucketer` trait provides a pluggable interface for the different
//! bucketing policies (frequency, label, numeric cutoffs). The aggregator only
//! ever talks to the trait, so a new policy needs a new implementation in
//! `bucketers` and one more arm in [`create_word_bucketer`].
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::fmt;

use crate::bucketers::cutoffs::{parse_float_cutoffs, parse_int_cutoffs};
use crate::bucketers::frequency_bucketer::{FrequencyBucketer, DEFAULT_FREQ_CUTOFFS};
use crate::bucketers::label_bucketer::LabelBucketer;
use crate::bucketers::numeric_bucketer::{NumericCutoffBucketer, DEFAULT_NUMERIC_CUTOFFS};
use crate::config::{BucketProfile, BucketType};
use crate::corpus::TokenCorpus;
use crate::errors::{LikelihoodError, Result};
use crate::frequency::FrequencyTable;

/// A trait that assigns every reference position to exactly one bucket.
///
/// Implementations are immutable once built: the same position always maps
/// to the same bucket and bucket indices stay valid for the whole report.
pub trait WordBucketer: Send + Sync + fmt::Debug {
    /// Short name of the policy, used in report headers.
    fn name(&self) -> &str;

    /// Display strings for every bucket, indexed by bucket.
    fn bucket_labels(&self) -> &[String];

    /// Returns the bucket for the word at `position`.
    ///
    /// # Arguments
    /// * `position` - Index into the flattened reference.
    /// * `reference` - The flattened reference words.
    /// * `auxiliary` - The flattened label (or numeric value) sequence, aligned
    ///   with `reference`, for policies that need one.
    fn bucket_index_for(&self, position: usize, reference: &[&str], auxiliary: Option<&[&str]>) -> Result<usize>;

    /// Checks the whole auxiliary sequence once, before any system is
    /// aggregated. Policies that only read the reference accept anything.
    fn check_auxiliary(&self, _auxiliary: Option<&[&str]>) -> Result<()> {
        Ok(())
    }

    fn num_buckets(&self) -> usize {
        self.bucket_labels().len()
    }
}

/// Fetches `sequence[position]`, turning a short sequence into an alignment error.
pub(crate) fn token_at<'a>(sequence: &[&'a str], position: usize, what: &str) -> Result<&'a str> {
    sequence.get(position).copied().ok_or_else(|| {
        LikelihoodError::alignment(format!(
            "position {} is past the end of the {} ({} entries)",
            position,
            what,
            sequence.len()
        ))
    })
}

/// Runs every check that needs nothing but the profile itself.
pub(crate) fn check_profile(profile: &BucketProfile) -> Result<()> {
    profile.validate()?;
    ensure_consistent(profile)
}

/// Rejects profile keys that mean nothing for the selected bucket type.
fn ensure_consistent(profile: &BucketProfile) -> Result<()> {
    let bucket_type = profile.bucket_type;
    let mut misplaced = Vec::new();

    if bucket_type != BucketType::Freq {
        if profile.freq_count_file.is_some() {
            misplaced.push("freq_count_file");
        }
        if profile.freq_corpus_file.is_some() {
            misplaced.push("freq_corpus_file");
        }
    }
    if bucket_type != BucketType::Freq && profile.case_insensitive {
        misplaced.push("case_insensitive");
    }
    if bucket_type == BucketType::Freq && profile.label_corpus.is_some() {
        misplaced.push("label_corpus");
    }
    if bucket_type != BucketType::Label && profile.label_set.is_some() {
        misplaced.push("label_set");
    }
    if bucket_type == BucketType::Label && profile.bucket_cutoffs.is_some() {
        misplaced.push("bucket_cutoffs");
    }

    if misplaced.is_empty() {
        Ok(())
    } else {
        Err(LikelihoodError::config(format!(
            "{} not applicable to bucket_type={}",
            misplaced.join(", "),
            bucket_type
        )))
    }
}

/// Builds the bucketer a profile asks for.
///
/// All configuration problems surface here, before any aggregation: a
/// missing or doubled frequency source, a label or numeric policy without
/// auxiliary data, unparseable cutoffs.
///
/// # Arguments
/// * `profile` - The parsed bucketing profile.
/// * `auxiliary` - The label (or numeric value) corpus, when one is loaded.
pub fn create_word_bucketer(profile: &BucketProfile, auxiliary: Option<&TokenCorpus>) -> Result<Box<dyn WordBucketer>> {
    check_profile(profile)?;

    let bucketer: Box<dyn WordBucketer> = match profile.bucket_type {
        BucketType::Freq => {
            let cutoffs = match profile.bucket_cutoffs.as_deref() {
                Some(text) => parse_int_cutoffs(text)?,
                None => DEFAULT_FREQ_CUTOFFS.to_vec(),
            };
            let source = profile.frequency_source()?;
            let table = FrequencyTable::build(&source, profile.case_insensitive)?;
            Box::new(FrequencyBucketer::new(table, cutoffs)?)
        }
        BucketType::Label => {
            let labels = auxiliary.ok_or_else(|| {
                LikelihoodError::config("bucket_type=label needs label data (set label_corpus)")
            })?;
            match &profile.label_set {
                Some(label_set) => Box::new(LabelBucketer::new(label_set.clone())?),
                None => Box::new(LabelBucketer::from_first_appearance(labels)?),
            }
        }
        BucketType::Numeric => {
            if auxiliary.is_none() {
                return Err(LikelihoodError::config(
                    "bucket_type=numeric needs per-word values (set label_corpus)",
                ));
            }
            let cutoffs = match profile.bucket_cutoffs.as_deref() {
                Some(text) => parse_float_cutoffs(text)?,
                None => DEFAULT_NUMERIC_CUTOFFS.to_vec(),
            };
            Box::new(NumericCutoffBucketer::new(cutoffs)?)
        }
    };

    debug!(
        "Created {} bucketer with {} buckets: {:?}",
        bucketer.name(),
        bucketer.num_buckets(),
        bucketer.bucket_labels()
    );
    Ok(bucketer)
}
