//! Word frequency tables used by the frequency bucketer.
//!
//! A table is built once, either by counting a raw corpus or by reading a
//! precomputed `token<TAB>count` file, and never changes afterwards. When
//! case folding is on, the same folding is applied on insert and on lookup;
//! the flag lives on the table so the two can't drift apart.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::corpus::{load_tokens, TokenCorpus};
use crate::errors::{LikelihoodError, Result};

/// Where the counts for a frequency table come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencySource {
    /// A whitespace-tokenized corpus; every occurrence is counted.
    CorpusFile(PathBuf),
    /// Precomputed counts, one `token<TAB>count` pair per line.
    CountFile(PathBuf),
}

/// Immutable token -> occurrence count mapping.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    case_insensitive: bool,
}

impl FrequencyTable {
    /// Counts every token occurrence in `corpus`.
    pub fn from_corpus(corpus: &TokenCorpus, case_insensitive: bool) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for token in corpus.iter() {
            *counts.entry(fold(token, case_insensitive).into_owned()).or_insert(0) += 1;
        }
        debug!("Counted {} distinct tokens from corpus.", counts.len());
        Self { counts, case_insensitive }
    }

    /// Parses `token<TAB>count` lines. Blank lines are skipped.
    ///
    /// Tokens that fold to the same key under `case_insensitive` have their
    /// counts summed.
    pub fn from_count_reader<R: BufRead>(reader: R, source_name: &str, case_insensitive: bool) -> Result<Self> {
        let mut counts: HashMap<String, u64> = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LikelihoodError::Io {
                path: PathBuf::from(source_name),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let (token, count) = line.split_once('\t').ok_or_else(|| {
                LikelihoodError::input_format(source_name, idx + 1, "expected 'token<TAB>count'")
            })?;
            let count: u64 = count.trim().parse().map_err(|_| {
                LikelihoodError::input_format(
                    source_name,
                    idx + 1,
                    format!("count '{}' is not a non-negative integer", count.trim()),
                )
            })?;

            *counts.entry(fold(token, case_insensitive).into_owned()).or_insert(0) += count;
        }

        debug!("Read {} distinct tokens from count file {}.", counts.len(), source_name);
        Ok(Self { counts, case_insensitive })
    }

    /// Loads a table from disk.
    pub fn build(source: &FrequencySource, case_insensitive: bool) -> Result<Self> {
        let table = match source {
            FrequencySource::CorpusFile(path) => Self::from_corpus(&load_tokens(path)?, case_insensitive),
            FrequencySource::CountFile(path) => {
                let reader = open(path)?;
                Self::from_count_reader(reader, &path.display().to_string(), case_insensitive)?
            }
        };
        info!("Frequency table ready with {} distinct tokens.", table.len());
        Ok(table)
    }

    /// Occurrence count for `token`; absent tokens count as 0.
    pub fn count(&self, token: &str) -> u64 {
        self.counts
            .get(&*fold(token, self.case_insensitive))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn fold(token: &str, case_insensitive: bool) -> Cow<'_, str> {
    if case_insensitive {
        Cow::Owned(token.to_lowercase())
    } else {
        Cow::Borrowed(token)
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LikelihoodError::Io {
            path: path.to_path_buf(),
            source,
        })
}
