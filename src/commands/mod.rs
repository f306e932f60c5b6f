//! CLI command definitions and dispatch.

pub mod call;
pub mod plugins;
pub mod shell;

use clap::{Parser, Subcommand};
use serde_json::Value;

use dynasty_core::config::AppConfig;
use dynasty_core::AppResult;
use dynasty_plugin::{HookPayload, PluginError, PluginManager};
use dynasty_plugins::builtin_catalog;

use crate::output::{self, OutputFormat};

/// Dynasty plugin host: for the Dynasty geopolitical game
#[derive(Debug, Parser)]
#[command(name = "dynasty", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Plugin directory, overriding the configuration
    #[arg(short, long)]
    pub plugin_dir: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Discover plugins and list them
    Plugins(plugins::PluginsArgs),
    /// Activate plugins and call a hook
    Call(call::CallArgs),
    /// Interactive plugin shell
    Shell,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.command {
            Commands::Plugins(args) => plugins::execute(args, config, self.format),
            Commands::Call(args) => call::execute(args, config, self.format),
            Commands::Shell => shell::execute(config, self.format),
        }
    }
}

/// Helper: discover the plugin directory and activate the configured
/// plugins. Manifests that fail to load are reported but do not abort.
pub fn build_manager(config: &AppConfig) -> AppResult<PluginManager> {
    let mut manager = PluginManager::new(&config.plugins, builtin_catalog());

    let report = manager.discover()?;
    for problem in report.skipped.iter().chain(&report.failed) {
        output::print_warning(&problem.to_string());
    }

    let requested = config.plugins.auto_activate.len();
    let activated = manager.activate_all(config.plugins.auto_activate.as_slice());
    if activated.len() < requested {
        output::print_warning(&format!(
            "{} of {} configured plugins could not be activated",
            requested - activated.len(),
            requested
        ));
    }

    Ok(manager)
}

/// Reports a failed activation or deactivation. Misuse (unknown, already
/// active, not active) is a warning; a failing plugin callback is an error.
pub fn report_lifecycle_error(err: &PluginError) {
    if err.is_misuse() {
        output::print_warning(&err.to_string());
    } else {
        output::print_error(&err.to_string());
    }
}

/// Parses a `KEY=VALUE` hook argument. The value is read as JSON when it
/// parses, and as a plain string otherwise.
pub fn parse_named_arg(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid argument '{raw}': expected KEY=VALUE"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid argument '{raw}': empty key"));
    }

    Ok((key.to_string(), parse_value(value)))
}

/// Parses a positional hook argument the same way as a named value.
pub fn parse_value(raw: &str) -> Value {
    let raw = raw.trim();
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Builds a hook payload from parsed positional and named arguments.
pub fn build_payload(positional: &[Value], named: &[(String, Value)]) -> HookPayload {
    let payload = positional
        .iter()
        .cloned()
        .fold(HookPayload::new(), HookPayload::with_arg);
    named
        .iter()
        .fold(payload, |payload, (key, value)| payload.with_data(key, value.clone()))
}
