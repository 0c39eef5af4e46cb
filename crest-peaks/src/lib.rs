//! crest-peaks: the read-to-peak pipeline.
//!
//! Turns aligned sequencing reads into ranked candidate binding-site
//! intervals in four stages: reads are resized to the inferred fragment
//! length ([`extend`]), folded into a per-chromosome depth profile
//! ([`coverage`]), scanned for maximal regions exceeding a depth
//! threshold ([`islands`]), and summarized and ranked ([`summarize`]).
//! [`pipeline`] composes the stages and shards the work by chromosome;
//! [`shift`] estimates the fragment length when the caller does not
//! supply one.

pub mod coverage;
pub mod extend;
pub mod islands;
pub mod pipeline;
pub mod reading;
pub mod shift;
pub mod summarize;
pub mod writing;

pub use pipeline::{FragmentLength, PeakCallConfig, call_peaks};
