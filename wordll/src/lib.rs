// wordll/src/lib.rs
//! # wordll CLI Application
//!
//! Command-line front end for `wordll-core`: reads the reference and
//! per-system likelihood files, runs each bucketing profile and prints the
//! resulting reports as text, a table or JSON.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::report::{run_report, ProfileInput, ReportOptions, ReportRunError, RunSummary};
