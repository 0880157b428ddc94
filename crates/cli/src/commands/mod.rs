//! CLI subcommands.

pub mod check;
pub mod tools;

use std::io::Write;

use serde_json::Value;
use thiserror::Error;

use matomo_chat_server::config::ConfigError;
use matomo_chat_server::matomo::MatomoError;
use matomo_chat_server::tools::ToolError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Matomo request failed.
    #[error("Matomo error: {0}")]
    Matomo(#[from] MatomoError),

    /// Tool call failed.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// `--input` is not valid JSON.
    #[error("Invalid --input JSON: {0}")]
    InvalidInput(#[source] serde_json::Error),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Pretty-print a JSON value to stdout.
fn print_json(value: &Value) -> Result<(), CommandError> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
