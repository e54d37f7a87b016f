// wordll-core/src/bucketers/label_bucketer.rs
//! A `WordBucketer` that buckets each reference word by the label aligned
//! with it (part-of-speech tag, named-entity class and so on).
//! License: MIT OR Apache-2.0

use log::debug;
use std::collections::{HashMap, HashSet};

use crate::bucketer::{token_at, WordBucketer};
use crate::corpus::TokenCorpus;
use crate::errors::{LikelihoodError, Result};

/// One bucket per permissible label, in a fixed order.
#[derive(Debug, Clone)]
pub struct LabelBucketer {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelBucketer {
    /// Buckets follow the order of `label_set`. Labels outside the set are
    /// rejected when bucketing.
    pub fn new(label_set: Vec<String>) -> Result<Self> {
        if label_set.is_empty() {
            return Err(LikelihoodError::config("label_set must name at least one label"));
        }

        let mut index = HashMap::with_capacity(label_set.len());
        for (i, label) in label_set.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(LikelihoodError::config(format!("label_set lists '{}' more than once", label)));
            }
        }

        debug!("Initializing LabelBucketer with labels {:?}", label_set);
        Ok(Self { labels: label_set, index })
    }

    /// Derives the label set from `labels`, in order of first appearance.
    pub fn from_first_appearance(labels: &TokenCorpus) -> Result<Self> {
        let mut label_set: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for label in labels.iter() {
            if seen.insert(label.as_str()) {
                label_set.push(label.clone());
            }
        }

        if label_set.is_empty() {
            return Err(LikelihoodError::config("label corpus contains no labels"));
        }
        Self::new(label_set)
    }

    pub fn index_of_label(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    fn bucket_of(&self, label: &str, position: usize) -> Result<usize> {
        self.index_of_label(label).ok_or_else(|| LikelihoodError::UnrecognizedLabel {
            label: label.to_string(),
            position,
        })
    }
}

fn require_labels<'a, 'b>(auxiliary: Option<&'a [&'b str]>) -> Result<&'a [&'b str]> {
    auxiliary.ok_or_else(|| LikelihoodError::config("label bucketing needs a label sequence"))
}

impl WordBucketer for LabelBucketer {
    fn name(&self) -> &str {
        "label"
    }

    fn bucket_labels(&self) -> &[String] {
        &self.labels
    }

    fn bucket_index_for(&self, position: usize, _reference: &[&str], auxiliary: Option<&[&str]>) -> Result<usize> {
        let labels = require_labels(auxiliary)?;
        let label = token_at(labels, position, "label sequence")?;
        self.bucket_of(label, position)
    }

    fn check_auxiliary(&self, auxiliary: Option<&[&str]>) -> Result<()> {
        for (position, label) in require_labels(auxiliary)?.iter().enumerate() {
            self.bucket_of(label, position)?;
        }
        Ok(())
    }
}
