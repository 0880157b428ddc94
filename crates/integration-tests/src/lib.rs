//! Integration tests for the Matomo chat tools.
//!
//! Every test runs the tool facade against a `wiremock` stand-in for the
//! Matomo Reporting API, so no Matomo install or token is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p matomo-chat-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `tool_calls` - Each tool end to end, with request and result shapes
//! - `tool_registry` - Tool definitions and call parsing

use matomo_chat_server::config::MatomoConfig;
use matomo_chat_server::matomo::MatomoClient;
use serde_json::Value;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token the test client sends.
pub const TEST_TOKEN: &str = "test-token";

/// A mock Matomo server and a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: MatomoClient,
}

impl TestContext {
    /// Start a mock Matomo server and build a client for it.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[allow(clippy::expect_used)]
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = MatomoConfig::new(&server.uri(), Some(TEST_TOKEN.to_string().into()))
            .expect("mock server URI should parse");
        let client = MatomoClient::new(&config).expect("client should build");
        Self { server, client }
    }

    /// Answer requests for `report_method` whose body contains every
    /// fragment in `params` with `body`, expecting exactly `times` calls.
    pub async fn mock_report(&self, report_method: &str, params: &[&str], body: Value, times: u64) {
        let mut mock = Mock::given(method("POST"))
            .and(path("/index.php"))
            .and(body_string_contains(format!("method={report_method}")));
        for param in params {
            mock = mock.and(body_string_contains(*param));
        }
        mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Form bodies of every request received so far, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if request recording is disabled.
    #[allow(clippy::expect_used)]
    pub async fn received_bodies(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
            .into_iter()
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .collect()
    }
}
