//! Result aggregation
//!
//! This module turns one run's probe results into summary statistics.

pub mod aggregator;

pub use aggregator::{status_map, summarize};
