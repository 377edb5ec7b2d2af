//! Reachability probing
//!
//! This module performs the single outbound request behind each
//! reachability check.

pub mod prober;

pub use prober::{HttpProber, Probe};
