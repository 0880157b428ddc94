//! Matomo-related errors.

use thiserror::Error;

/// Errors that can occur when calling the Matomo Reporting API.
///
/// Only transport and upstream faults are errors. Missing keys or a record
/// where a list was expected are absorbed by the report shapers instead.
#[derive(Debug, Error)]
pub enum MatomoError {
    /// HTTP request failed (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Matomo answered with a non-success status.
    #[error("Matomo returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// Matomo rejected the credentials at the HTTP level.
    #[error("Unauthorized: Matomo rejected the token (HTTP {0})")]
    Unauthorized(u16),

    /// Matomo answered 200 with `{"result": "error"}`.
    #[error("Matomo API error: {0}")]
    Api(String),

    /// Failed to decode the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}
