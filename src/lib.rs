//! # sitepulse
//!
//! Checks whether a set of URLs is reachable, either one at a time or with
//! one concurrent task per target, and summarizes the outcome.
//!
//! ```rust,no_run
//! use sitepulse::{Dispatcher, HttpProber, Strategy, config::Config, summarize};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = Dispatcher::new(HttpProber::with_config(&Config::default())?);
//!     let targets = vec!["https://www.rust-lang.org".to_string()];
//!
//!     let (results, wall_clock) = dispatcher.run_timed(&targets, Strategy::Concurrent).await;
//!     let report = summarize(results, wall_clock);
//!
//!     println!("{}/{} reachable", report.success_count, report.total_count);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod dispatch;
pub mod logging;
pub mod probe;
pub mod report;
pub mod ui;

pub use crate::core::{ProbeResult, Report, Result, SitePulseError, Strategy};
pub use dispatch::Dispatcher;
pub use probe::{HttpProber, Probe};
pub use report::{status_map, summarize};
