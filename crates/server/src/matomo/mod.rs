//! Matomo Reporting API integration.
//!
//! # API Reference
//!
//! - Endpoint: `{MATOMO_URL}/index.php`
//! - Request: form-encoded POST with `module=API`, `method`, `format=JSON`,
//!   `token_auth`, `idSite`, `period`, `date` and report-specific extras
//! - Errors: HTTP status codes, or HTTP 200 with `{"result": "error"}`

mod client;
mod error;
mod request;

pub use client::MatomoClient;
pub use error::MatomoError;
pub use request::{ReportMethod, ReportRequest};
