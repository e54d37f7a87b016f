// wordll/src/ui/mod.rs
//! Console presentation: colour themes and report rendering.

pub mod output_format;
pub mod theme;
