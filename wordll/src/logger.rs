// wordll/src/logger.rs
//! Logger bootstrap for the `wordll` binary and its tests.
//!
//! Logs go to stderr so that reports on stdout stay machine-readable.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is honoured with a `warn` default; `level_override` replaces
/// it entirely (`Off` for `--quiet`, `Debug` for `--debug`). Safe to call
/// more than once, later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
