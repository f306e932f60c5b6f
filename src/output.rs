//! Rendering of command results.
//!
//! Results go to stdout in the selected format. Notices (warnings, errors,
//! confirmations) go to stderr so that `--format json` output stays parseable.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array
    Json,
}

/// Renders rows in the selected format. `empty` is shown instead of an
/// empty table.
pub fn render_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat, empty: &str) -> String {
    match format {
        OutputFormat::Table if rows.is_empty() => empty.to_string(),
        OutputFormat::Table => Table::new(rows).with(Style::rounded()).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string()),
    }
}

/// Prints rows to stdout.
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat, empty: &str) {
    println!("{}", render_rows(rows, format, empty));
}

pub fn print_success(msg: &str) {
    eprintln!("✓ {msg}");
}

pub fn print_warning(msg: &str) {
    eprintln!("⚠ {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
