//! Probe dispatching
//!
//! This module drives probes over a list of targets, either one at a
//! time or as one concurrent task per target feeding a shared channel.

pub mod dispatcher;

pub use dispatcher::Dispatcher;
