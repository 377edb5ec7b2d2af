//! User interface and interaction
//!
//! This module contains all components related to user interaction:
//! CLI parsing, colors and report rendering.

pub mod cli;
pub mod color;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::{display_report, display_run_start};
