//! Extraction pipeline for yunlog.
//!
//! Responsible for selecting the relevant log files, scanning them for
//! bracketed datapoints, and folding the validated datapoints into the
//! per-series [`DataDict`](yunlog_core::models::DataDict).

pub mod aggregator;
pub mod extractor;
pub mod selector;

pub use yunlog_core as core;
