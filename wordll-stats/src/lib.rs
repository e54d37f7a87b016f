// wordll-stats/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod accumulator;
pub mod cutoffs;

pub use accumulator::BucketStat;
pub use cutoffs::{is_strictly_ascending, partition_index};

/// Common type definitions
pub type LogLikelihood = f64;
