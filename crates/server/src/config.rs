//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Matomo
//! - `MATOMO_URL` - Matomo base URL (default: <https://matomo.kioskoai.com>)
//! - `MATOMO_TOKEN` - Reporting API `token_auth` (optional; a missing token
//!   surfaces as an upstream authentication error on the first call)
//! - `MATOMO_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//!
//! ## Server
//! - `SERVER_HOST` - Bind address (default: 127.0.0.1)
//! - `SERVER_PORT` - Listen port (default: 3002)
//!
//! ## Optional (Sentry)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_MATOMO_URL: &str = "https://matomo.kioskoai.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Matomo Reporting API configuration
    pub matomo: MatomoConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Matomo Reporting API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct MatomoConfig {
    /// Base URL of the Matomo install, without trailing slash
    pub base_url: String,
    /// `token_auth` sent with every request
    pub token: Option<SecretString>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for MatomoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatomoConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MatomoConfig {
    /// Build a configuration for the given base URL and token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL does not parse.
    pub fn new(base_url: &str, token: Option<SecretString>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load the Matomo section from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MATOMO_URL` or `MATOMO_TIMEOUT_SECS` is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("MATOMO_URL", DEFAULT_MATOMO_URL);
        let token = get_optional_env("MATOMO_TOKEN").map(SecretString::from);
        let timeout_secs = parse_env_or_default("MATOMO_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let mut config = Self::new(&base_url, token)?;
        config.timeout = Duration::from_secs(timeout_secs);
        Ok(config)
    }

    /// Full URL of the Reporting API endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/index.php", self.base_url)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SERVER_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SERVER_HOST".to_string(), e.to_string()))?;
        let port = parse_env_or_default("SERVER_PORT", 3002_u16)?;

        Ok(Self {
            host,
            port,
            matomo: MatomoConfig::from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_env_or_default("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: parse_env_or_default("SENTRY_TRACES_SAMPLE_RATE", 0.1)?,
        })
    }

    /// Get the socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Validate a base URL and strip any trailing slash.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidEnvVar("MATOMO_URL".to_string(), e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "MATOMO_URL".to_string(),
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }

    Ok(trimmed.to_string())
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |value| {
        value
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://matomo.example.com/").unwrap(),
            "https://matomo.example.com"
        );
        assert_eq!(
            normalize_base_url(" http://127.0.0.1:8080// ").unwrap(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_garbage() {
        let err = normalize_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "MATOMO_URL"));

        let err = normalize_base_url("ftp://matomo.example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_endpoint() {
        let config = MatomoConfig::new("https://matomo.example.com/", None).unwrap();
        assert_eq!(config.endpoint(), "https://matomo.example.com/index.php");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_parse_env_or_default_missing_uses_default() {
        let value: u16 = parse_env_or_default("MATOMO_CHAT_TEST_UNSET_VAR", 3002).unwrap();
        assert_eq!(value, 3002);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3002,
            matomo: MatomoConfig::new(DEFAULT_MATOMO_URL, None).unwrap(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.1,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3002);
    }

    #[test]
    fn test_matomo_config_debug_redacts_token() {
        let config = MatomoConfig::new(
            "https://matomo.example.com",
            Some(SecretString::from("super_secret_token_auth")),
        )
        .unwrap();

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("https://matomo.example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token_auth"));
    }

    #[test]
    fn test_matomo_config_debug_without_token() {
        let config = MatomoConfig::new("https://matomo.example.com", None).unwrap();
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("token: None"));
    }
}
