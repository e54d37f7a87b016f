// wordll-core/src/bucketers/mod.rs
//! This module contains the bucketing policy implementations.
//!
//! Each policy is a separate file within this directory and implements the
//! `WordBucketer` trait. `cutoffs` holds the range logic shared by the
//! frequency and numeric policies.
//!
//! # License
//! MIT OR Apache-2.0

pub mod cutoffs;
pub mod frequency_bucketer;
pub mod label_bucketer;
pub mod numeric_bucketer;
