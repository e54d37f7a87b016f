// wordll-core/src/bucketers/cutoffs.rs
//! Cutoff parsing and the ranges they induce.
//!
//! A cutoff string is a colon-separated, strictly ascending list of numbers
//! (`1:2:3:10:100`). `n` cutoffs make `n + 1` ranges: `<= c0`, then
//! `(c(i-1), ci]` for each neighbouring pair, then `> c(n-1)`.

use std::fmt::Display;
use std::str::FromStr;

use wordll_stats::{is_strictly_ascending, partition_index};

use crate::errors::{LikelihoodError, Result};

/// Separator between cutoffs in a profile value.
pub const CUTOFF_SEPARATOR: char = ':';

fn parse_with<T, F>(text: &str, accept: F) -> Result<Vec<T>>
where
    T: FromStr + PartialOrd,
    F: Fn(&T) -> bool,
{
    let mut cutoffs = Vec::new();
    for field in text.split(CUTOFF_SEPARATOR) {
        let field = field.trim();
        let value = field
            .parse::<T>()
            .ok()
            .filter(|v| accept(v))
            .ok_or_else(|| LikelihoodError::config(format!("invalid cutoff '{}' in '{}'", field, text)))?;
        cutoffs.push(value);
    }

    if !is_strictly_ascending(&cutoffs) {
        return Err(LikelihoodError::config(format!(
            "cutoffs '{}' must be strictly ascending",
            text
        )));
    }
    Ok(cutoffs)
}

/// Parses integer cutoffs for frequency bucketing.
pub fn parse_int_cutoffs(text: &str) -> Result<Vec<u64>> {
    parse_with(text, |_| true)
}

/// Parses float cutoffs for numeric bucketing. Non-finite values are rejected.
pub fn parse_float_cutoffs(text: &str) -> Result<Vec<f64>> {
    parse_with(text, |v: &f64| v.is_finite())
}

/// Numeric value that can serve as a cutoff and be shown in a bucket label.
pub trait CutoffValue: PartialOrd + Copy + Display {
    /// True when no value of this type lies strictly between `lower` and
    /// `upper` other than `upper` itself, so the range can be labelled with
    /// `upper` alone.
    fn is_successor(lower: Self, upper: Self) -> bool;
}

impl CutoffValue for u64 {
    fn is_successor(lower: Self, upper: Self) -> bool {
        lower.checked_add(1) == Some(upper)
    }
}

impl CutoffValue for f64 {
    fn is_successor(_lower: Self, _upper: Self) -> bool {
        false
    }
}

/// Ascending cutoffs plus the display label of every range they induce.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffRanges<T> {
    cutoffs: Vec<T>,
    labels: Vec<String>,
}

impl<T: CutoffValue> CutoffRanges<T> {
    pub fn new(cutoffs: Vec<T>) -> Result<Self> {
        if cutoffs.is_empty() {
            return Err(LikelihoodError::config("at least one cutoff is required"));
        }
        if !is_strictly_ascending(&cutoffs) {
            return Err(LikelihoodError::config("cutoffs must be strictly ascending"));
        }

        let mut labels = Vec::with_capacity(cutoffs.len() + 1);
        labels.push(format!("<={}", cutoffs[0]));
        for pair in cutoffs.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if T::is_successor(lower, upper) {
                labels.push(upper.to_string());
            } else {
                labels.push(format!("({},{}]", lower, upper));
            }
        }
        labels.push(format!(">{}", cutoffs[cutoffs.len() - 1]));

        Ok(Self { cutoffs, labels })
    }

    /// Index of the range containing `value`.
    pub fn index_of(&self, value: T) -> usize {
        partition_index(&self.cutoffs, &value)
    }

    pub fn cutoffs(&self) -> &[T] {
        &self.cutoffs
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
