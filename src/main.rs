//! Dynasty plugin host command-line entry point.
//!
//! Loads configuration, initialises logging, discovers the plugin directory
//! and runs the selected command against the resulting plugin manager.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use dynasty_core::AppResult;
use dynasty_core::config::{AppConfig, LogFormat, LoggingConfig};

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to load configuration: {}", e));
            std::process::exit(e.exit_code());
        }
    };

    init_logging(&config.logging);

    if let Err(e) = cli.execute(&config) {
        tracing::error!(kind = %e.kind, "{}", e.message);
        output::print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

/// Load configuration from file and environment, applying CLI overrides.
fn load_configuration(cli: &Cli) -> AppResult<AppConfig> {
    let env = std::env::var("DYNASTY_ENV").unwrap_or_else(|_| "development".to_string());

    let mut config = AppConfig::load(&cli.config, &env)?;

    if let Some(dir) = &cli.plugin_dir {
        config.plugins.directory = dir.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
