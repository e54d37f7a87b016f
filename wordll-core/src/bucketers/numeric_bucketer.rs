// wordll-core/src/bucketers/numeric_bucketer.rs
//! A `WordBucketer` that buckets words by an arbitrary numeric score aligned
//! with the reference, using the same cutoff ranges as frequency bucketing.
//! License: MIT OR Apache-2.0

use log::debug;

use crate::bucketer::{token_at, WordBucketer};
use crate::bucketers::cutoffs::CutoffRanges;
use crate::errors::{LikelihoodError, Result};

/// Cutoffs used when a numeric profile gives none: quartiles of the unit
/// interval.
pub const DEFAULT_NUMERIC_CUTOFFS: &[f64] = &[0.25, 0.5, 0.75];

#[derive(Debug)]
pub struct NumericCutoffBucketer {
    ranges: CutoffRanges<f64>,
}

impl NumericCutoffBucketer {
    pub fn new(cutoffs: Vec<f64>) -> Result<Self> {
        if cutoffs.iter().any(|c| !c.is_finite()) {
            return Err(LikelihoodError::config("numeric cutoffs must be finite"));
        }
        let ranges = CutoffRanges::new(cutoffs)?;
        debug!("Initializing NumericCutoffBucketer with cutoffs {:?}", ranges.cutoffs());
        Ok(Self { ranges })
    }

    pub fn bucket_for_value(&self, value: f64) -> usize {
        self.ranges.index_of(value)
    }
}

fn require_values<'a, 'b>(auxiliary: Option<&'a [&'b str]>) -> Result<&'a [&'b str]> {
    auxiliary.ok_or_else(|| LikelihoodError::config("numeric bucketing needs a value sequence"))
}

fn parse_value(raw: &str, position: usize) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LikelihoodError::NonNumericValue {
            value: raw.to_string(),
            position,
        })
}

impl WordBucketer for NumericCutoffBucketer {
    fn name(&self) -> &str {
        "numeric"
    }

    fn bucket_labels(&self) -> &[String] {
        self.ranges.labels()
    }

    fn bucket_index_for(&self, position: usize, _reference: &[&str], auxiliary: Option<&[&str]>) -> Result<usize> {
        let values = require_values(auxiliary)?;
        let raw = token_at(values, position, "value sequence")?;
        Ok(self.bucket_for_value(parse_value(raw, position)?))
    }

    fn check_auxiliary(&self, auxiliary: Option<&[&str]>) -> Result<()> {
        for (position, raw) in require_values(auxiliary)?.iter().enumerate() {
            parse_value(raw, position)?;
        }
        Ok(())
    }
}
