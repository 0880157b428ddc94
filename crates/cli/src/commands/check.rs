//! Matomo connectivity check.
//!
//! # Usage
//!
//! ```bash
//! matomo-cli check --site 5
//! ```
//!
//! # Environment Variables
//!
//! - `MATOMO_URL` - Matomo base URL
//! - `MATOMO_TOKEN` - Reporting API token

use matomo_chat_core::{PeriodParams, SiteId};
use matomo_chat_server::config::MatomoConfig;
use matomo_chat_server::matomo::{MatomoClient, ReportMethod, ReportRequest};

use super::{CommandError, print_json};

/// Fetch today's raw visits summary for `site` and print it unshaped.
pub async fn run(site: i32) -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let config = MatomoConfig::from_env()?;
    let client = MatomoClient::new(&config)?;

    tracing::info!(endpoint = %client.endpoint(), site, "Testing Matomo API");

    let request = ReportRequest::new(SiteId::new(site)).with_period(PeriodParams::TODAY);
    let body = client.fetch(ReportMethod::VisitsSummary, &request).await?;

    tracing::info!("Matomo answered");
    print_json(&body)
}
