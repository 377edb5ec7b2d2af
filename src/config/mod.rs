//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{files, output_formats, targets, timeouts};
use crate::core::error::{Result, SitePulseError};
use crate::core::types::Strategy;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// URLs to probe
    pub targets: Option<Vec<String>>,

    /// Dispatch strategy (sequential, concurrent)
    pub strategy: Option<String>,

    /// Transport timeout in seconds for each request; unset means no timeout
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: None, // Falls back to the built-in target list
            strategy: Some(Strategy::default().to_string()),
            timeout: None,
            user_agent: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SitePulseError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SitePulseError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(files::CONFIG_FILE_NAME) {
            return config;
        }

        for i in 1..=files::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), files::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if !cli_config.targets.is_empty() {
            self.targets = Some(cli_config.targets.clone());
        }
        if cli_config.sequential {
            self.strategy = Some(Strategy::Sequential.to_string());
        } else if cli_config.concurrent {
            self.strategy = Some(Strategy::Concurrent.to_string());
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Targets to probe, or the built-in list when none are configured
    pub fn targets_or_default(&self) -> Vec<String> {
        match self.targets {
            Some(ref targets) if !targets.is_empty() => targets.clone(),
            _ => targets::DEFAULT.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Parsed dispatch strategy, concurrent when unset
    pub fn strategy(&self) -> Result<Strategy> {
        match self.strategy {
            Some(ref strategy) => strategy.parse(),
            None => Ok(Strategy::default()),
        }
    }

    /// Get timeout as Duration, if one is configured
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn output_format(&self) -> &str {
        self.output_format.as_deref().unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(SitePulseError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(SitePulseError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        self.strategy()?;

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(SitePulseError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref targets) = self.targets
            && let Some(blank) = targets.iter().position(|t| t.trim().is_empty())
        {
            return Err(SitePulseError::Config(format!(
                "Target #{} is empty. Expected a URL.",
                blank + 1
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub targets: Vec<String>, // positional URLS
    pub sequential: bool,     // --sequential
    pub concurrent: bool,     // --concurrent
    pub timeout: Option<u64>, // --timeout

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Network
    pub user_agent: Option<String>, // --user-agent

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
