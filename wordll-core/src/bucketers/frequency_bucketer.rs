// wordll-core/src/bucketers/frequency_bucketer.rs
//! A `WordBucketer` that groups reference words by how often they occur in
//! a frequency source.
//! License: MIT OR Apache-2.0

use log::debug;

use crate::bucketer::{token_at, WordBucketer};
use crate::bucketers::cutoffs::CutoffRanges;
use crate::errors::Result;
use crate::frequency::FrequencyTable;

/// Cutoffs used when a frequency profile gives none: every count up to 5
/// gets its own bucket, then one bucket per order of magnitude up to 1000.
pub const DEFAULT_FREQ_CUTOFFS: &[u64] = &[1, 2, 3, 4, 5, 10, 100, 1000];

/// Buckets words by their count in a [`FrequencyTable`].
///
/// Words missing from the table have count 0 and fall into the first bucket.
#[derive(Debug)]
pub struct FrequencyBucketer {
    table: FrequencyTable,
    ranges: CutoffRanges<u64>,
}

impl FrequencyBucketer {
    pub fn new(table: FrequencyTable, cutoffs: Vec<u64>) -> Result<Self> {
        let ranges = CutoffRanges::new(cutoffs)?;
        debug!(
            "Initializing FrequencyBucketer with cutoffs {:?} over {} distinct tokens",
            ranges.cutoffs(),
            table.len()
        );
        Ok(Self { table, ranges })
    }

    /// Bucket for a single word, independent of its position.
    pub fn bucket_for_token(&self, token: &str) -> usize {
        self.ranges.index_of(self.table.count(token))
    }
}

impl WordBucketer for FrequencyBucketer {
    fn name(&self) -> &str {
        "frequency"
    }

    fn bucket_labels(&self) -> &[String] {
        self.ranges.labels()
    }

    fn bucket_index_for(&self, position: usize, reference: &[&str], _auxiliary: Option<&[&str]>) -> Result<usize> {
        let token = token_at(reference, position, "reference")?;
        Ok(self.bucket_for_token(token))
    }
}
