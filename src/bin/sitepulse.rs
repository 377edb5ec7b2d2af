use clap::Parser;
use sitepulse::config::{CliConfig, Config};
use sitepulse::core::constants::output_formats;
use sitepulse::logging;
use sitepulse::ui::{Cli, cli_to_config, display_report, display_run_start};
use sitepulse::{Dispatcher, HttpProber, summarize};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_sitepulse_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main probing logic extracted from main() for testing
pub async fn run_sitepulse_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    let strategy = config.strategy()?;
    let targets = config.targets_or_default();
    logging::log_config_info(&config, strategy, targets.len());

    let prober = HttpProber::with_config(&config).inspect_err(|e| {
        logging::log_error("Could not build HTTP client", Some(e));
    })?;
    let dispatcher = Dispatcher::new(prober);

    if output_settings.should_show_run_info() {
        display_run_start(targets.len(), strategy);
    }

    let (results, wall_clock) = dispatcher.run_timed(&targets, strategy).await;
    let report = summarize(results, wall_clock);

    display_report(
        &report,
        strategy,
        &output_settings.output_format,
        output_settings.quiet,
    )?;

    Ok(if report.is_all_reachable() { 0 } else { 1 })
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence; the merged result must still be valid
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

impl OutputSettings {
    pub fn should_show_run_info(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    OutputSettings {
        quiet: cli_config.quiet,
        verbose: config.verbose.unwrap_or(false),
        output_format: config.output_format().to_string(),
    }
}
