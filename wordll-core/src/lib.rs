// wordll-core/src/lib.rs
//! # wordll Core Library
//!
//! `wordll-core` computes per-word log-likelihood statistics for one or more
//! translation or language-model systems, grouped into interpretable
//! buckets: by word frequency, by an aligned label, or by explicit numeric
//! cutoffs over an aligned score.
//!
//! The library holds no state between calls and does no printing; the CLI
//! crate owns argument parsing and presentation.
//!
//! ## Modules
//!
//! * `corpus`: Sentence-per-line loading and the positional alignment contract.
//! * `frequency`: The immutable token -> count table behind frequency bucketing.
//! * `config`: Typed bucketing profiles, parsed from `key=value` strings or YAML.
//! * `bucketer`: The `WordBucketer` trait and the profile-driven factory.
//! * `bucketers`: Concrete frequency, label and numeric bucketers.
//! * `aggregate`: Per-bucket averaging of likelihoods, one pass per system.
//! * `report`: Side-by-side report assembly and text/JSON rendering.
//! * `headless`: One-call report generation for a single profile.
//! * `errors`: The `LikelihoodError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordll_core::{generate_report_with_labels, default_system_names, BucketProfile,
//!                   LikelihoodCorpus, NumberFormat, TokenCorpus};
//!
//! fn main() -> Result<(), wordll_core::LikelihoodError> {
//!     let reference = TokenCorpus::from_lines(["x y z"]);
//!     let labels = TokenCorpus::from_lines(["NOUN VERB NOUN"]);
//!     let systems: Vec<LikelihoodCorpus> = vec![vec![vec![-1.0, -2.0, -3.0]].into()];
//!
//!     let profile = BucketProfile::parse("bucket_type=label,label_set=NOUN+VERB")?;
//!     let report = generate_report_with_labels(
//!         &reference,
//!         &systems,
//!         &default_system_names(systems.len()),
//!         &profile,
//!         Some(&labels),
//!     )?;
//!
//!     print!("{}", report.render_text(&NumberFormat::default()));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible function returns [`LikelihoodError`]. Configuration
//! problems are reported when the bucketer is built, alignment problems
//! before any aggregation starts.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod aggregate;
pub mod bucketer;
pub mod bucketers;
pub mod config;
pub mod corpus;
pub mod errors;
pub mod frequency;
pub mod headless;
pub mod report;

/// Re-exports the profile types and loaders.
pub use config::{load_profiles_from_file, BucketProfile, BucketType, RECOGNIZED_KEYS};

/// Re-exports the custom error type for clear error reporting.
pub use errors::{ErrorKind, LikelihoodError};

pub use corpus::{load_nums, load_tokens, Corpus, LikelihoodCorpus, TokenCorpus};
pub use frequency::{FrequencySource, FrequencyTable};

/// Re-exports the bucketing trait, its factory and the concrete policies.
pub use bucketer::{create_word_bucketer, WordBucketer};
pub use bucketers::frequency_bucketer::{FrequencyBucketer, DEFAULT_FREQ_CUTOFFS};
pub use bucketers::label_bucketer::LabelBucketer;
pub use bucketers::numeric_bucketer::{NumericCutoffBucketer, DEFAULT_NUMERIC_CUTOFFS};

pub use aggregate::{aggregate, aggregate_systems, BucketedResult};
pub use report::{LikelihoodReport, NumberFormat, ReportRow, UNDEFINED_MARKER};

/// Re-exports the one-shot entry points.
pub use headless::{default_system_names, generate_report, generate_report_with_labels};
