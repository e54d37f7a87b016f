//! errors.rs - Custom error types for the wordll-core library.
//!
//! Every fallible operation in the core returns a [`LikelihoodError`]. The
//! variants follow the three failure families of a report run: a bad
//! bucketing configuration, misaligned input sequences and malformed input
//! files. I/O failures are kept separate so callers can tell a missing file
//! from a broken one.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`LikelihoodError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Alignment,
    InputFormat,
    Io,
}

/// This enum represents all possible error types in the `wordll-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LikelihoodError {
    #[error("Invalid bucketing configuration: {0}")]
    Config(String),

    #[error("Misaligned input: {0}")]
    Alignment(String),

    #[error("Malformed input in {source_name} at line {line}: {message}")]
    InputFormat {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("Label '{label}' at position {position} is not in the permissible label set")]
    UnrecognizedLabel { label: String, position: usize },

    #[error("Value '{value}' at position {position} is not a finite number")]
    NonNumericValue { value: String, position: usize },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LikelihoodError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn alignment(message: impl Into<String>) -> Self {
        Self::Alignment(message.into())
    }

    pub fn input_format(source_name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InputFormat {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LikelihoodError::Config(_) => ErrorKind::Config,
            LikelihoodError::Alignment(_) => ErrorKind::Alignment,
            LikelihoodError::InputFormat { .. }
            | LikelihoodError::UnrecognizedLabel { .. }
            | LikelihoodError::NonNumericValue { .. } => ErrorKind::InputFormat,
            LikelihoodError::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Shorthand used across the core.
pub type Result<T, E = LikelihoodError> = std::result::Result<T, E>;
