//! Configuration management for `wordll-core`.
//!
//! A bucketing profile selects the bucketing policy and the data it needs.
//! Profiles arrive either inline as comma-separated `key=value` strings
//! (`bucket_type=freq,bucket_cutoffs=1:2:3`) or as a YAML list of records in
//! a profile file. Both routes produce the same typed [`BucketProfile`] and
//! both reject keys they do not recognise.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::{LikelihoodError, Result};
use crate::frequency::FrequencySource;

/// Keys accepted in an inline profile string.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "bucket_type",
    "bucket_cutoffs",
    "freq_count_file",
    "freq_corpus_file",
    "label_corpus",
    "label_set",
    "case_insensitive",
];

/// Separator between labels in an inline `label_set` value.
pub const LABEL_SET_SEPARATOR: char = '+';

/// Which bucketing policy a profile asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketType {
    /// Bucket by how often the reference word occurs in a frequency source.
    #[default]
    Freq,
    /// Bucket by the label aligned with each reference word.
    Label,
    /// Bucket by a numeric value aligned with each reference word.
    Numeric,
}

impl FromStr for BucketType {
    type Err = LikelihoodError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "freq" => Ok(BucketType::Freq),
            "label" => Ok(BucketType::Label),
            "numeric" => Ok(BucketType::Numeric),
            other => Err(LikelihoodError::config(format!(
                "unknown bucket_type '{}'; expected one of: freq, label, numeric",
                other
            ))),
        }
    }
}

impl fmt::Display for BucketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BucketType::Freq => "freq",
            BucketType::Label => "label",
            BucketType::Numeric => "numeric",
        };
        f.write_str(name)
    }
}

/// One bucketing profile.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BucketProfile {
    pub bucket_type: BucketType,
    /// Colon-separated cutoffs, parsed when the bucketer is built.
    pub bucket_cutoffs: Option<String>,
    /// `token<TAB>count` file for frequency bucketing.
    pub freq_count_file: Option<PathBuf>,
    /// Raw corpus to count frequencies from.
    pub freq_corpus_file: Option<PathBuf>,
    /// Labels (or numeric values) aligned with the reference.
    pub label_corpus: Option<PathBuf>,
    /// Permissible labels, in bucket order.
    pub label_set: Option<Vec<String>>,
    pub case_insensitive: bool,
}

impl BucketProfile {
    /// Parses an inline `key=value,key=value` profile.
    ///
    /// An empty string yields the default profile (frequency bucketing).
    pub fn parse(profile: &str) -> Result<Self> {
        let mut parsed = BucketProfile::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for pair in profile.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                LikelihoodError::config(format!("profile entry '{}' is not of the form key=value", pair))
            })?;
            let (key, value) = (key.trim(), value.trim());

            if !seen.insert(key) {
                return Err(LikelihoodError::config(format!("profile key '{}' given more than once", key)));
            }

            match key {
                "bucket_type" => parsed.bucket_type = value.parse()?,
                "bucket_cutoffs" => parsed.bucket_cutoffs = Some(value.to_string()),
                "freq_count_file" => parsed.freq_count_file = Some(PathBuf::from(value)),
                "freq_corpus_file" => parsed.freq_corpus_file = Some(PathBuf::from(value)),
                "label_corpus" => parsed.label_corpus = Some(PathBuf::from(value)),
                "label_set" => {
                    parsed.label_set = Some(value.split(LABEL_SET_SEPARATOR).map(|l| l.trim().to_string()).collect())
                }
                "case_insensitive" => parsed.case_insensitive = parse_bool(key, value)?,
                other => {
                    return Err(LikelihoodError::config(format!(
                        "unrecognized profile key '{}'; expected one of: {}",
                        other,
                        RECOGNIZED_KEYS.join(", ")
                    )))
                }
            }
        }

        parsed.validate()?;
        debug!("Parsed profile '{}' into {:?}", profile, parsed);
        Ok(parsed)
    }

    /// Checks constraints that hold regardless of the bucket type.
    pub fn validate(&self) -> Result<()> {
        if let Some(labels) = &self.label_set {
            let mut unique = HashSet::new();
            for label in labels {
                if label.is_empty() {
                    return Err(LikelihoodError::config("label_set contains an empty label"));
                }
                if !unique.insert(label.as_str()) {
                    return Err(LikelihoodError::config(format!("label_set lists '{}' more than once", label)));
                }
            }
        }
        Ok(())
    }

    /// Resolves the frequency source. Exactly one of `freq_count_file` and
    /// `freq_corpus_file` must be set.
    pub fn frequency_source(&self) -> Result<FrequencySource> {
        match (&self.freq_count_file, &self.freq_corpus_file) {
            (Some(count_file), None) => Ok(FrequencySource::CountFile(count_file.clone())),
            (None, Some(corpus_file)) => Ok(FrequencySource::CorpusFile(corpus_file.clone())),
            (Some(_), Some(_)) => Err(LikelihoodError::config(
                "freq_count_file and freq_corpus_file are mutually exclusive; give exactly one",
            )),
            (None, None) => Err(LikelihoodError::config(
                "frequency bucketing needs freq_count_file or freq_corpus_file",
            )),
        }
    }
}

impl FromStr for BucketProfile {
    type Err = LikelihoodError;

    fn from_str(s: &str) -> Result<Self> {
        BucketProfile::parse(s)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(LikelihoodError::config(format!(
            "profile key '{}' expects true or false, got '{}'",
            key, value
        ))),
    }
}

/// Loads a YAML list of profiles.
///
/// ```yaml
/// - bucket_type: freq
///   freq_count_file: counts.tsv
///   bucket_cutoffs: "1:10:100"
/// - bucket_type: label
///   label_corpus: ref.pos
///   label_set: [NOUN, VERB]
/// ```
pub fn load_profiles_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<BucketProfile>> {
    let path = path.as_ref();
    info!("Loading bucketing profiles from: {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| LikelihoodError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles: Vec<BucketProfile> = serde_yml::from_str(&text).map_err(|e| {
        LikelihoodError::config(format!("failed to parse profile file {}: {}", path.display(), e))
    })?;

    for profile in &profiles {
        profile.validate()?;
    }
    info!("Loaded {} profiles from file {}.", profiles.len(), path.display());
    Ok(profiles)
}
