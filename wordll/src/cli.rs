// wordll/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordll application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

use crate::ui::output_format::OutputFormat;

/// Profile used when neither `--compare-word-likelihoods` nor `--profile-file` is given.
pub const DEFAULT_PROFILE: &str = "bucket_type=freq";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordll",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compare per-word log likelihoods of translation systems",
    long_about = "wordll reads a reference file and one log-likelihood file per system, groups the reference words into buckets (by frequency, by an aligned label, or by an aligned numeric score) and prints each system's average word log likelihood per bucket.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Reference words over which the likelihoods were computed, one sentence per line.
    #[arg(long = "ref-file", value_name = "FILE", required = true)]
    pub ref_file: PathBuf,

    /// Per-word log likelihoods for the reference, one file per system.
    #[arg(long = "ll-files", value_name = "FILE", num_args = 1.., required = true)]
    pub ll_files: Vec<PathBuf>,

    /// Display names for the systems, in the order of --ll-files (default: sys1, sys2, ...).
    #[arg(long = "sys-names", value_name = "NAME", num_args = 1..)]
    pub sys_names: Option<Vec<String>>,

    /// Bucketing profiles in 'key=value,key=value' form, one report each.
    #[arg(
        long = "compare-word-likelihoods",
        value_name = "PROFILE",
        num_args = 0..,
        help = "Compare word log likelihoods by buckets, e.g. 'bucket_type=freq,freq_count_file=counts.tsv'. Keys: bucket_type, bucket_cutoffs, freq_count_file, freq_corpus_file, label_corpus, label_set, case_insensitive."
    )]
    pub compare_word_likelihoods: Option<Vec<String>>,

    /// YAML file holding a list of bucketing profiles.
    #[arg(long = "profile-file", value_name = "FILE", env = "WORDLL_PROFILE_FILE")]
    pub profile_file: Option<PathBuf>,

    /// Number of decimals to print for averages.
    #[arg(long, default_value_t = 4)]
    pub decimals: usize,

    /// Output format for the reports.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Suppress all log output.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd')]
    pub debug: bool,
}

impl Cli {
    /// Inline profiles to run; falls back to [`DEFAULT_PROFILE`] when no
    /// profile source was given at all.
    pub fn inline_profiles(&self) -> Vec<String> {
        match (&self.compare_word_likelihoods, &self.profile_file) {
            (Some(profiles), _) => profiles.clone(),
            (None, Some(_)) => Vec::new(),
            (None, None) => vec![DEFAULT_PROFILE.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_profile_applies_without_profile_sources() {
        let cli = Cli::parse_from(["wordll", "--ref-file", "ref.txt", "--ll-files", "a.ll", "b.ll"]);
        assert_eq!(cli.ll_files.len(), 2);
        assert_eq!(cli.inline_profiles(), vec![DEFAULT_PROFILE.to_string()]);
        assert_eq!(cli.decimals, 4);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn explicit_profiles_replace_the_default() {
        let cli = Cli::parse_from([
            "wordll",
            "--ref-file",
            "ref.txt",
            "--ll-files",
            "a.ll",
            "--compare-word-likelihoods",
            "bucket_type=label,label_corpus=ref.pos",
            "bucket_type=numeric,label_corpus=ref.num",
        ]);
        assert_eq!(cli.inline_profiles().len(), 2);
    }

    #[test]
    fn profile_file_alone_disables_the_default() {
        let cli = Cli::parse_from(["wordll", "--ref-file", "r", "--ll-files", "a", "--profile-file", "p.yaml"]);
        assert!(cli.inline_profiles().is_empty());
    }
}
