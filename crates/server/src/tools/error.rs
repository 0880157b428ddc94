//! Error types for tool execution.

use thiserror::Error;

use crate::matomo::MatomoError;

/// Errors that can occur when running a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool with this name exists.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Tool input is not an object of the expected argument types.
    #[error("invalid input for {tool}: {message}")]
    InvalidInput {
        /// Tool name.
        tool: String,
        /// What was wrong with the input.
        message: String,
    },

    /// The Matomo request failed.
    #[error("Matomo request failed: {0}")]
    Upstream(#[from] MatomoError),

    /// The shaped result could not be serialized.
    #[error("failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    pub(crate) fn invalid_input(tool: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            tool: tool.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ToolError::UnknownTool("get_sales".to_string()).to_string(),
            "unknown tool: get_sales"
        );
        assert_eq!(
            ToolError::invalid_input("get_top_pages", "limit must be a number").to_string(),
            "invalid input for get_top_pages: limit must be a number"
        );
        assert_eq!(
            ToolError::Upstream(MatomoError::Unauthorized(401)).to_string(),
            "Matomo request failed: Unauthorized: Matomo rejected the token (HTTP 401)"
        );
    }
}
