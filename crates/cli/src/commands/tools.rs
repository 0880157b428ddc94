//! Tool listing and direct tool calls.
//!
//! # Usage
//!
//! ```bash
//! matomo-cli sites
//! matomo-cli tools
//! matomo-cli call get_top_pages --input '{"site": "becgi", "limit": 5}'
//! ```

use matomo_chat_server::config::MatomoConfig;
use matomo_chat_server::matomo::MatomoClient;
use matomo_chat_server::tools::{ToolExecutor, analytics_tools};
use serde_json::Value;

use super::{CommandError, print_json};

/// Print the tracked site directory.
pub fn sites() -> Result<(), CommandError> {
    print_json(&serde_json::to_value(ToolExecutor::list_sites())?)
}

/// Print the tool definitions.
pub fn definitions() -> Result<(), CommandError> {
    print_json(&serde_json::to_value(analytics_tools())?)
}

/// Run one tool with a JSON object of arguments and print the result.
pub async fn call(name: &str, input: &str) -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let input: Value = serde_json::from_str(input).map_err(CommandError::InvalidInput)?;

    let config = MatomoConfig::from_env()?;
    let client = MatomoClient::new(&config)?;

    let result = ToolExecutor::new(&client).execute(name, &input).await?;
    print_json(&result)
}
