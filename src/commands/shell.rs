//! Interactive plugin shell.

use dialoguer::{Input, Select};

use dynasty_core::config::AppConfig;
use dynasty_core::AppResult;
use dynasty_core::error::AppError;
use dynasty_plugin::PluginManager;

use crate::output::{self, OutputFormat};

const ACTIONS: &[&str] = &[
    "List plugins",
    "Activate plugin",
    "Deactivate plugin",
    "Call hook",
    "Quit",
];

/// Execute the shell command
pub fn execute(config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let mut manager = super::build_manager(config)?;

    loop {
        let choice = Select::new()
            .with_prompt("Dynasty plugins")
            .items(ACTIONS)
            .default(0)
            .interact()
            .map_err(input_error)?;

        match choice {
            0 => super::plugins::print_plugins(&manager, false, format),
            1 => {
                let name = pick_plugin(&manager.registered_plugins(), "Plugin to activate")?;
                if let Some(name) = name {
                    match manager.activate(&name) {
                        Ok(()) => output::print_success(&format!("Activated {}", name)),
                        Err(e) => super::report_lifecycle_error(&e),
                    }
                }
            }
            2 => {
                let name = pick_plugin(&manager.active_plugins(), "Plugin to deactivate")?;
                if let Some(name) = name {
                    match manager.deactivate(&name) {
                        Ok(()) => output::print_success(&format!("Deactivated {}", name)),
                        Err(e) => super::report_lifecycle_error(&e),
                    }
                }
            }
            3 => call_hook(&manager, format)?,
            _ => break,
        }
    }

    manager.deactivate_all();
    Ok(())
}

fn pick_plugin(names: &[String], prompt: &str) -> AppResult<Option<String>> {
    if names.is_empty() {
        output::print_warning("No plugins available");
        return Ok(None);
    }

    let index = Select::new()
        .with_prompt(prompt)
        .items(names)
        .default(0)
        .interact()
        .map_err(input_error)?;
    Ok(names.get(index).cloned())
}

fn call_hook(manager: &PluginManager, format: OutputFormat) -> AppResult<()> {
    let hook: String = Input::new()
        .with_prompt("Hook name")
        .with_initial_text("hook_")
        .interact_text()
        .map_err(input_error)?;

    let raw: String = Input::new()
        .with_prompt("Arguments (KEY=VALUE, space separated)")
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;

    let mut named = Vec::new();
    for token in raw.split_whitespace() {
        match super::parse_named_arg(token) {
            Ok(pair) => named.push(pair),
            Err(e) => {
                output::print_warning(&e);
                return Ok(());
            }
        }
    }

    let payload = super::build_payload(&[], &named);
    super::call::print_outcome(manager.dispatch(hook.trim(), &payload), format);
    Ok(())
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::interactive(e.to_string())
}
