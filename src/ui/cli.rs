// Command-line interface definitions and parsing for sitepulse

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URLs to check (default: targets from the config file, then a built-in list)
    pub urls: Vec<String>,

    // Core Options
    /// Probe one target at a time instead of all at once
    #[arg(long, help_heading = "Core Options")]
    pub sequential: bool,

    /// Probe all targets at once, overriding a sequential config file
    #[arg(long, conflicts_with = "sequential", help_heading = "Core Options")]
    pub concurrent: bool,

    /// Request timeout in seconds (default: none)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    // Output & Verbosity
    /// Suppress text output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, conflicts_with = "config", help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        targets: cli.urls.clone(),
        sequential: cli.sequential,
        concurrent: cli.concurrent,
        timeout: cli.timeout,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        user_agent: cli.user_agent.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
