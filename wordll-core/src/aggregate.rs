//! Per-bucket aggregation of word log-likelihoods.
//!
//! One linear pass per system: every position is sent to the bucket the
//! bucketer picks and its likelihood is added to that bucket's running sum.
//! Systems never share mutable state, so several of them are aggregated in
//! parallel against the same bucketer.
//!
//! License: MIT OR Apache-2.0

use log::{debug, warn};
use rayon::prelude::*;

use wordll_stats::BucketStat;

use crate::bucketer::WordBucketer;
use crate::corpus::{LikelihoodCorpus, TokenCorpus};
use crate::errors::Result;

/// Per-bucket sums and counts for one system, indexed like the bucketer's
/// labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketedResult {
    stats: Vec<BucketStat>,
}

impl BucketedResult {
    fn empty(num_buckets: usize) -> Self {
        Self {
            stats: vec![BucketStat::new(); num_buckets],
        }
    }

    pub fn stats(&self) -> &[BucketStat] {
        &self.stats
    }

    pub fn num_buckets(&self) -> usize {
        self.stats.len()
    }

    /// Average likelihood per bucket; `None` marks a bucket with no words.
    pub fn averages(&self) -> Vec<Option<f64>> {
        self.stats.iter().map(BucketStat::mean).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.stats.iter().map(|s| s.count).collect()
    }

    /// Number of positions aggregated over all buckets.
    pub fn total_count(&self) -> usize {
        self.stats.iter().map(|s| s.count).sum()
    }
}

fn aggregate_flat(
    reference: &[&str],
    auxiliary: Option<&[&str]>,
    likelihoods: &LikelihoodCorpus,
    bucketer: &dyn WordBucketer,
) -> Result<BucketedResult> {
    let mut result = BucketedResult::empty(bucketer.num_buckets());
    for (position, likelihood) in likelihoods.iter().enumerate() {
        let bucket = bucketer.bucket_index_for(position, reference, auxiliary)?;
        result.stats[bucket].push(*likelihood);
    }

    let empty = result.stats.iter().filter(|s| s.is_empty()).count();
    if empty > 0 {
        warn!("{} of {} buckets received no words", empty, result.num_buckets());
    }
    Ok(result)
}

/// Averages `likelihoods` per bucket.
///
/// # Arguments
/// * `reference` - The reference words.
/// * `likelihoods` - One log-likelihood per reference word, same shape.
/// * `bucketer` - The bucketing policy.
/// * `auxiliary` - Labels or numeric values aligned with the reference, if
///   the policy needs them.
pub fn aggregate(
    reference: &TokenCorpus,
    likelihoods: &LikelihoodCorpus,
    bucketer: &dyn WordBucketer,
    auxiliary: Option<&TokenCorpus>,
) -> Result<BucketedResult> {
    reference.ensure_aligned_with(likelihoods, "likelihoods")?;
    if let Some(aux) = auxiliary {
        reference.ensure_aligned_with(aux, "label corpus")?;
    }

    let flat_reference = reference.flat_tokens();
    let flat_auxiliary = auxiliary.map(TokenCorpus::flat_tokens);
    bucketer.check_auxiliary(flat_auxiliary.as_deref())?;
    aggregate_flat(&flat_reference, flat_auxiliary.as_deref(), likelihoods, bucketer)
}

/// Runs [`aggregate`] for every system, in parallel, keeping input order.
///
/// All inputs are checked for alignment before any system is aggregated.
pub fn aggregate_systems(
    reference: &TokenCorpus,
    systems: &[LikelihoodCorpus],
    bucketer: &dyn WordBucketer,
    auxiliary: Option<&TokenCorpus>,
) -> Result<Vec<BucketedResult>> {
    for (idx, likelihoods) in systems.iter().enumerate() {
        reference.ensure_aligned_with(likelihoods, &format!("likelihoods of system {}", idx + 1))?;
    }
    if let Some(aux) = auxiliary {
        reference.ensure_aligned_with(aux, "label corpus")?;
    }
    if reference.is_empty() {
        warn!("Reference is empty; every bucket will be reported without data.");
    }

    let flat_reference = reference.flat_tokens();
    let flat_auxiliary = auxiliary.map(TokenCorpus::flat_tokens);
    bucketer.check_auxiliary(flat_auxiliary.as_deref())?;

    debug!(
        "Aggregating {} systems over {} positions with the {} bucketer",
        systems.len(),
        flat_reference.len(),
        bucketer.name()
    );

    systems
        .par_iter()
        .map(|likelihoods| aggregate_flat(&flat_reference, flat_auxiliary.as_deref(), likelihoods, bucketer))
        .collect()
}
