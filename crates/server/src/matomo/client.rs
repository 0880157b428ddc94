//! Matomo Reporting API client.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::instrument;

use crate::config::MatomoConfig;

use super::error::MatomoError;
use super::request::{ReportMethod, ReportRequest};

/// Longest error body kept in `MatomoError::Status`.
const MAX_ERROR_BODY: usize = 512;

/// Matomo Reporting API client.
///
/// Issues one form-encoded POST per report. POST is used because Matomo
/// only accepts `token_auth` reliably in the request body. The client holds
/// no per-call state and is cheap to clone.
#[derive(Clone)]
pub struct MatomoClient {
    inner: Arc<MatomoClientInner>,
}

struct MatomoClientInner {
    client: reqwest::Client,
    endpoint: String,
    token: Option<SecretString>,
}

impl MatomoClient {
    /// Create a new Matomo client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &MatomoConfig) -> Result<Self, MatomoError> {
        if config.token.is_none() {
            tracing::warn!("MATOMO_TOKEN is not set; Matomo will reject authenticated reports");
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(MatomoClientInner {
                client,
                endpoint: config.endpoint(),
                token: config.token.clone(),
            }),
        })
    }

    /// Reporting API endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Fetch a report and return the decoded JSON body as-is.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, an
    /// undecodable body, or a Matomo `{"result": "error"}` payload.
    #[instrument(skip(self, request), fields(method = %method, site_id = %request.site_id))]
    pub async fn fetch(
        &self,
        method: ReportMethod,
        request: &ReportRequest,
    ) -> Result<Value, MatomoError> {
        let mut form: Vec<(&str, String)> = vec![
            ("module", "API".to_string()),
            ("method", method.as_str().to_string()),
            ("format", "JSON".to_string()),
        ];
        if let Some(token) = &self.inner.token {
            form.push(("token_auth", token.expose_secret().to_string()));
        }
        form.extend(request.form_params());

        tracing::debug!(params = ?request.form_params(), "Requesting Matomo report");

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .form(&form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Check status, decode JSON and surface Matomo's in-band errors.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, MatomoError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(MatomoError::Unauthorized(status.as_u16()));
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MatomoError::Status {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| MatomoError::Parse(format!("Failed to parse response: {e}")))?;

        if let Some(message) = api_error_message(&body) {
            tracing::warn!(endpoint = %self.inner.endpoint, %message, "Matomo API error");
            return Err(MatomoError::Api(message));
        }

        Ok(body)
    }
}

impl std::fmt::Debug for MatomoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatomoClient")
            .field("endpoint", &self.inner.endpoint)
            .finish_non_exhaustive()
    }
}

/// Extract the message from a `{"result": "error", "message": ...}` body.
fn api_error_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    if object.get("result").and_then(Value::as_str) != Some("error") {
        return None;
    }
    Some(
        object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string(),
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", s.get(..end).unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use matomo_chat_core::{PeriodParams, SiteId};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer, token: Option<&str>) -> MatomoClient {
        let config = MatomoConfig::new(&server.uri(), token.map(SecretString::from)).unwrap();
        MatomoClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_posts_form_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/index.php"))
            .and(body_string_contains("module=API"))
            .and(body_string_contains("method=VisitsSummary.get"))
            .and(body_string_contains("format=JSON"))
            .and(body_string_contains("token_auth=abc123"))
            .and(body_string_contains("idSite=5"))
            .and(body_string_contains("period=week"))
            .and(body_string_contains("date=today"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nb_visits": 12})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("abc123"));
        let request = ReportRequest::new(SiteId::new(5)).with_period(PeriodParams::THIS_WEEK);
        let body = client
            .fetch(ReportMethod::VisitsSummary, &request)
            .await
            .unwrap();

        assert_eq!(body, json!({"nb_visits": 12}));
    }

    #[tokio::test]
    async fn test_fetch_omits_missing_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/index.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let request = ReportRequest::new(SiteId::new(4)).with_last_minutes(30);
        client
            .fetch(ReportMethod::LiveCounters, &request)
            .await
            .unwrap();

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        let body = String::from_utf8(received[0].body.clone()).unwrap();
        assert!(!body.contains("token_auth"));
        assert!(body.contains("lastMinutes=30"));
        assert!(!body.contains("period="));
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let err = client
            .fetch(ReportMethod::Country, &ReportRequest::new(SiteId::new(4)))
            .await
            .unwrap_err();

        assert!(matches!(err, MatomoError::Status { status: 500, ref message } if message == "boom"));
    }

    #[tokio::test]
    async fn test_fetch_forbidden_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let err = client
            .fetch(ReportMethod::Keywords, &ReportRequest::new(SiteId::new(4)))
            .await
            .unwrap_err();

        assert!(matches!(err, MatomoError::Unauthorized(403)));
    }

    #[tokio::test]
    async fn test_fetch_in_band_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": "error",
                "message": "You must be logged in to access this functionality."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .fetch(ReportMethod::VisitsSummary, &ReportRequest::new(SiteId::new(4)))
            .await
            .unwrap_err();

        assert!(matches!(err, MatomoError::Api(ref m) if m.contains("logged in")));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .fetch(ReportMethod::PageUrls, &ReportRequest::new(SiteId::new(4)))
            .await
            .unwrap_err();

        assert!(matches!(err, MatomoError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_http_error() {
        let config = MatomoConfig::new("http://127.0.0.1:9", None).unwrap();
        let client = MatomoClient::new(&config).unwrap();
        let err = client
            .fetch(ReportMethod::VisitsSummary, &ReportRequest::new(SiteId::new(4)))
            .await
            .unwrap_err();

        assert!(matches!(err, MatomoError::Http(_)), "{err}");
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(
            api_error_message(&json!({"result": "error", "message": "bad token"})),
            Some("bad token".to_string())
        );
        assert_eq!(api_error_message(&json!({"result": "success"})), None);
        assert_eq!(api_error_message(&json!([{"result": "error"}])), None);
        assert_eq!(api_error_message(&json!({"nb_visits": 3})), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("días", 2), "d...");
    }

    #[test]
    fn test_debug_hides_token() {
        let config =
            MatomoConfig::new("https://matomo.example.com", Some(SecretString::from("tok"))).unwrap();
        let client = MatomoClient::new(&config).unwrap();
        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("https://matomo.example.com/index.php"));
        assert!(!debug_output.contains("tok"));
    }
}
