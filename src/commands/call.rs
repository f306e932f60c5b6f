//! Hook call command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dynasty_core::config::AppConfig;
use dynasty_core::AppResult;
use dynasty_core::error::AppError;
use dynasty_plugin::{DispatchResult, HookName};

use crate::output::{self, OutputFormat};

/// Arguments for the call command
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Hook to call (must start with `hook_`)
    pub hook: String,

    /// Plugin to activate before calling (repeatable)
    #[arg(short = 'A', long = "activate")]
    pub activate: Vec<String>,

    /// Named argument as KEY=VALUE; VALUE is parsed as JSON when possible (repeatable)
    #[arg(short = 'a', long = "arg", value_parser = super::parse_named_arg)]
    pub args: Vec<(String, serde_json::Value)>,

    /// Positional argument; parsed as JSON when possible (repeatable)
    #[arg(long = "pos")]
    pub positional: Vec<String>,
}

/// Table row for one hook response
#[derive(Debug, Serialize, Tabled)]
pub struct HookResultRow {
    /// Plugin that answered
    plugin: String,
    /// Response as JSON text
    output: String,
}

/// Execute the call command
pub fn execute(args: &CallArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    if HookName::parse(args.hook.as_str()).is_none() {
        return Err(AppError::invalid_input(format!(
            "'{}' is not a hook name (hooks start with 'hook_')",
            args.hook
        )));
    }

    let mut manager = super::build_manager(config)?;
    for name in &args.activate {
        if let Err(e) = manager.activate(name) {
            super::report_lifecycle_error(&e);
        }
    }

    let positional: Vec<serde_json::Value> =
        args.positional.iter().map(|raw| super::parse_value(raw)).collect();
    let payload = super::build_payload(&positional, &args.args);

    print_outcome(manager.dispatch(&args.hook, &payload), format);
    Ok(())
}

/// Prints successful responses, then failed bindings as errors.
pub fn print_outcome(outcome: DispatchResult, format: OutputFormat) {
    if outcome.invoked() == 0 {
        output::print_warning("No active plugin is bound to this hook");
    }
    for failure in &outcome.failures {
        output::print_error(&format!(
            "{} failed in {}: {}",
            failure.plugin_id, failure.hook, failure.reason
        ));
    }

    let rows: Vec<HookResultRow> = outcome
        .results
        .into_iter()
        .map(|result| HookResultRow {
            plugin: result.plugin_id,
            output: result.output.to_string(),
        })
        .collect();
    output::print_rows(&rows, format, "No plugin answered.");
}
