// wordll/src/commands/mod.rs
//! Command implementations for the wordll CLI.

pub mod report;
