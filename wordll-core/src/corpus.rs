//! Corpus loading and the positional alignment contract.
//!
//! A corpus is read one sentence per line, whitespace delimited. Reference
//! tokens, label tokens and likelihood values all share this layout, and
//! positions are counted over the flattened corpus, sentence by sentence.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::errors::{LikelihoodError, Result};

/// Sentences of `T`, one inner vector per input line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Corpus<T> {
    sentences: Vec<Vec<T>>,
}

/// Reference words or per-word labels.
pub type TokenCorpus = Corpus<String>;

/// Per-word log-likelihoods produced by one system.
pub type LikelihoodCorpus = Corpus<f64>;

impl<T> Corpus<T> {
    pub fn new(sentences: Vec<Vec<T>>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Vec<T>] {
        &self.sentences
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// Total number of evaluated positions across all sentences.
    pub fn num_positions(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_positions() == 0
    }

    /// Iterates over every position in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.sentences.iter().flatten()
    }

    /// Checks that `other` has the same sentence count and per-sentence
    /// lengths as `self`. `what` names `other` in the error message.
    pub fn ensure_aligned_with<U>(&self, other: &Corpus<U>, what: &str) -> Result<()> {
        if self.num_sentences() != other.num_sentences() {
            return Err(LikelihoodError::alignment(format!(
                "reference has {} sentences but {} has {}",
                self.num_sentences(),
                what,
                other.num_sentences()
            )));
        }

        for (idx, (ours, theirs)) in self.sentences.iter().zip(other.sentences()).enumerate() {
            if ours.len() != theirs.len() {
                return Err(LikelihoodError::alignment(format!(
                    "sentence {}: reference has {} words but {} has {}",
                    idx + 1,
                    ours.len(),
                    what,
                    theirs.len()
                )));
            }
        }
        Ok(())
    }
}

impl<T> From<Vec<Vec<T>>> for Corpus<T> {
    fn from(sentences: Vec<Vec<T>>) -> Self {
        Self::new(sentences)
    }
}

impl TokenCorpus {
    /// Builds a corpus from whitespace-delimited lines held in memory.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(lines.into_iter().map(split_tokens).collect())
    }

    /// Borrowed view of every token in flattened order.
    pub fn flat_tokens(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

fn split_tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| LikelihoodError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parses a token corpus from any buffered reader.
pub fn parse_tokens<R: BufRead>(reader: R, source_name: &str) -> Result<TokenCorpus> {
    let mut sentences = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| LikelihoodError::Io {
            path: PathBuf::from(source_name),
            source,
        })?;
        sentences.push(split_tokens(&line));
    }
    Ok(Corpus::new(sentences))
}

/// Parses a numeric corpus from any buffered reader.
///
/// Each whitespace-delimited field must be a float; anything else is an
/// [`LikelihoodError::InputFormat`] naming the 1-based line number.
pub fn parse_nums<R: BufRead>(reader: R, source_name: &str) -> Result<LikelihoodCorpus> {
    let mut sentences = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LikelihoodError::Io {
            path: PathBuf::from(source_name),
            source,
        })?;
        let values = line
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    LikelihoodError::input_format(
                        source_name,
                        idx + 1,
                        format!("'{}' is not a number", field),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        sentences.push(values);
    }
    Ok(Corpus::new(sentences))
}

/// Loads a token corpus (reference or labels) from disk.
pub fn load_tokens<P: AsRef<Path>>(path: P) -> Result<TokenCorpus> {
    let path = path.as_ref();
    debug!("Loading tokens from {}", path.display());
    let corpus = parse_tokens(open(path)?, &path.display().to_string())?;
    info!(
        "Loaded {} sentences ({} words) from {}.",
        corpus.num_sentences(),
        corpus.num_positions(),
        path.display()
    );
    Ok(corpus)
}

/// Loads a likelihood corpus from disk.
pub fn load_nums<P: AsRef<Path>>(path: P) -> Result<LikelihoodCorpus> {
    let path = path.as_ref();
    debug!("Loading numbers from {}", path.display());
    let corpus = parse_nums(open(path)?, &path.display().to_string())?;
    info!(
        "Loaded {} sentences ({} values) from {}.",
        corpus.num_sentences(),
        corpus.num_positions(),
        path.display()
    );
    Ok(corpus)
}
