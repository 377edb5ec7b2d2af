//! Application-wide constants to avoid magic values throughout the codebase.

/// Output format constants
pub mod output_formats {
    /// Text output format - colorful output with a summary block
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one plain line per target
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Dispatch strategy names as they appear in config files
pub mod strategies {
    pub const SEQUENTIAL: &str = "sequential";
    pub const CONCURRENT: &str = "concurrent";

    pub const ALL: [&str; 2] = [SEQUENTIAL, CONCURRENT];
}

/// Timeout constants
pub mod timeouts {
    /// Maximum reasonable transport timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
}

/// Targets probed when neither the command line nor a config file supplies any
pub mod targets {
    pub const DEFAULT: [&str; 6] = [
        "https://www.google.com",
        "https://www.facebook.com",
        "https://www.twitter.com",
        "https://www.linkedin.com",
        "https://www.instagram.com",
        "https://www.youtube.com",
    ];
}

/// Status labels shown for each probe outcome
pub mod status_labels {
    pub const UP: &str = "UP";
    pub const DOWN: &str = "DOWN";
}

/// Error message constants
pub mod error_messages {
    /// Description attached to the synthetic result of a panicked probe task
    pub const PROBE_TASK_PANICKED: &str = "probe task panicked";
}

/// File names
pub mod files {
    /// Config file looked up in the current and parent directories
    pub const CONFIG_FILE_NAME: &str = ".sitepulse.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Display and formatting constants
pub mod display {
    pub const SUCCESS_EMOJI: &str = "✅";
    pub const ERROR_EMOJI: &str = "❌";
    pub const URL_COLUMN_WIDTH: usize = 30;
}
