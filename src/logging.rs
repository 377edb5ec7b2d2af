use crate::config::Config;
use crate::core::types::{ProbeResult, Strategy};
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, strategy: Strategy, target_count: usize) {
    let timeout = config
        .timeout
        .map(|t| format!("{t}s"))
        .unwrap_or_else(|| "none".to_string());

    info!("Configuration: strategy={strategy}, targets={target_count}, timeout={timeout}");
    info!("HTTP: user_agent={}", config.user_agent());
}

/// Log the start of a dispatch run
pub fn log_dispatch_start(strategy: Strategy, target_count: usize) {
    info!("Dispatching {target_count} probe(s) ({strategy})");
}

/// Log the end of a dispatch run
pub fn log_dispatch_complete(strategy: Strategy, results: &[ProbeResult], duration_ms: u128) {
    let reachable = results.iter().filter(|r| r.reachable).count();
    info!(
        "Dispatch complete ({strategy}): {reachable}/{} reachable ({duration_ms}ms)",
        results.len()
    );
}

/// Log an individual probe result for debugging
pub fn log_probe_result(result: &ProbeResult) {
    match (result.reachable, result.status_code, result.error.as_deref()) {
        (true, Some(status), _) => debug!("✓ {} -> {status} ({:?})", result.url, result.elapsed),
        (true, None, _) => debug!("✓ {} ({:?})", result.url, result.elapsed),
        (false, _, Some(err)) => debug!("✗ {} -> {err} ({:?})", result.url, result.elapsed),
        (false, _, None) => debug!("✗ {} ({:?})", result.url, result.elapsed),
    }
}

/// Log a probe task that unwound instead of returning a result
pub fn log_probe_panic(url: &str) {
    warn!("Probe task for {url} panicked; recording it as unreachable");
}

/// Log a receive loop that ended before every dispatched task reported
pub fn log_collection_shortfall(received: usize, expected: usize) {
    warn!("Collected {received} of {expected} probe results; remaining tasks ended without reporting");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
