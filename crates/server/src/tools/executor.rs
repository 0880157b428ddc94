//! Tool executor.
//!
//! Each operation resolves its inputs, issues its Matomo requests one at a
//! time, and shapes the responses. Only upstream failures are errors.

use matomo_chat_core::{
    PeriodParams, SiteId, SiteRef, TRACKED_SITES, TrackedSite, resolve_period,
};
use serde_json::Value;
use tracing::instrument;

use crate::matomo::{MatomoClient, ReportMethod, ReportRequest};
use crate::reports::{
    CountriesReport, DevicesReport, KeywordsReport, LiveVisitors, ReferrersReport, SiteComparison,
    TopPagesReport, VisitsSummary, convert_comparison_entry, convert_countries, convert_devices,
    convert_keywords, convert_live_visitors, convert_referrers, convert_top_pages,
    convert_visits_summary,
};

use super::call::{CompareArgs, ListArgs, LiveArgs, SiteArgs, ToolCall};
use super::error::ToolError;

/// Runs analytics tools against a Matomo client.
pub struct ToolExecutor<'a> {
    matomo: &'a MatomoClient,
}

impl<'a> ToolExecutor<'a> {
    /// Create a new tool executor.
    #[must_use]
    pub const fn new(matomo: &'a MatomoClient) -> Self {
        Self { matomo }
    }

    /// Execute a tool by name and return its JSON result.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool is unknown, the input is malformed, or
    /// a Matomo request fails.
    #[instrument(skip(self, input), fields(tool_name = %name))]
    pub async fn execute(&self, name: &str, input: &Value) -> Result<Value, ToolError> {
        let call = ToolCall::parse(name, input)?;
        self.run(&call).await
    }

    /// Execute a parsed tool call and return its JSON result.
    ///
    /// # Errors
    ///
    /// Returns an error if a Matomo request fails.
    pub async fn run(&self, call: &ToolCall) -> Result<Value, ToolError> {
        let value = match call {
            ToolCall::VisitsSummary(args) => {
                serde_json::to_value(self.get_visits_summary(args).await?)?
            }
            ToolCall::TopPages(args) => serde_json::to_value(self.get_top_pages(args).await?)?,
            ToolCall::Referrers(args) => serde_json::to_value(self.get_referrers(args).await?)?,
            ToolCall::Countries(args) => serde_json::to_value(self.get_countries(args).await?)?,
            ToolCall::Devices(args) => serde_json::to_value(self.get_devices(args).await?)?,
            ToolCall::LiveVisitors(args) => {
                serde_json::to_value(self.get_live_visitors(args).await?)?
            }
            ToolCall::SearchKeywords(args) => {
                serde_json::to_value(self.get_search_keywords(args).await?)?
            }
            ToolCall::CompareSites(args) => serde_json::to_value(self.compare_sites(args).await?)?,
            ToolCall::ListSites => serde_json::to_value(Self::list_sites())?,
        };
        Ok(value)
    }

    // =========================================================================
    // Single-record reports
    // =========================================================================

    /// Visit summary for a site and period.
    ///
    /// # Errors
    ///
    /// Returns an error if the Matomo request fails.
    pub async fn get_visits_summary(&self, args: &SiteArgs) -> Result<VisitsSummary, ToolError> {
        let site_id = resolve_site(&args.site);
        let request = ReportRequest::new(site_id).with_period(resolve_phrase(&args.period));

        let raw = self.matomo.fetch(ReportMethod::VisitsSummary, &request).await?;
        Ok(convert_visits_summary(&args.site, site_id, &args.period, &raw))
    }

    /// Live counters for the last `minutes` minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the Matomo request fails.
    pub async fn get_live_visitors(&self, args: &LiveArgs) -> Result<LiveVisitors, ToolError> {
        let request = ReportRequest::new(resolve_site(&args.site)).with_last_minutes(args.minutes);

        let raw = self.matomo.fetch(ReportMethod::LiveCounters, &request).await?;
        Ok(convert_live_visitors(&args.site, args.minutes, &raw))
    }

    // =========================================================================
    // List reports
    // =========================================================================

    /// Most visited pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the Matomo request fails.
    pub async fn get_top_pages(&self, args: &ListArgs) -> Result<TopPagesReport, ToolError> {
        let raw = self.fetch_list(ReportMethod::PageUrls, args).await?;
        Ok(convert_top_pages(&args.site, &args.period, &raw, args.limit))
    }

    /// Traffic sources by channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the Matomo request fails.
    pub async fn get_referrers(&self, args: &ListArgs) -> Result<ReferrersReport, ToolError> {
        let raw = self.fetch_list(ReportMethod::ReferrerType, args).await?;
        Ok(convert_referrers(&args.site, &args.period, &raw, args.limit))
    }

    /// Visitor countries.
    ///
    /// # Errors
    ///
    /// Returns an error if the Matomo request fails.
    pub async fn get_countries(&self, args: &ListArgs) -> Result<CountriesReport, ToolError> {
        let raw = self.fetch_list(ReportMethod::Country, args).await?;
        Ok(convert_countries(&args.site, &args.period, &raw, args.limit))
    }

    /// Device type breakdown. Not limited.
    ///
    /// # Errors
    ///
    /// Returns an error if the Matomo request fails.
    pub async fn get_devices(&self, args: &SiteArgs) -> Result<DevicesReport, ToolError> {
        let request =
            ReportRequest::new(resolve_site(&args.site)).with_period(resolve_phrase(&args.period));

        let raw = self.matomo.fetch(ReportMethod::DeviceType, &request).await?;
        Ok(convert_devices(&args.site, &args.period, &raw))
    }

    /// Search keywords that brought visitors.
    ///
    /// # Errors
    ///
    /// Returns an error if the Matomo request fails.
    pub async fn get_search_keywords(&self, args: &ListArgs) -> Result<KeywordsReport, ToolError> {
        let raw = self.fetch_list(ReportMethod::Keywords, args).await?;
        Ok(convert_keywords(&args.site, &args.period, &raw, args.limit))
    }

    async fn fetch_list(&self, method: ReportMethod, args: &ListArgs) -> Result<Value, ToolError> {
        let request = ReportRequest::new(resolve_site(&args.site))
            .with_period(resolve_phrase(&args.period))
            .with_limit(args.limit);

        Ok(self.matomo.fetch(method, &request).await?)
    }

    // =========================================================================
    // Directory
    // =========================================================================

    /// Summary of every tracked site, in directory order.
    ///
    /// Requests are issued one after another. The first failure aborts the
    /// comparison.
    ///
    /// # Errors
    ///
    /// Returns an error if any Matomo request fails.
    pub async fn compare_sites(&self, args: &CompareArgs) -> Result<SiteComparison, ToolError> {
        let period = resolve_phrase(&args.period);
        let mut comparison = Vec::with_capacity(TRACKED_SITES.len());

        for site in TRACKED_SITES {
            let request = ReportRequest::new(site.id).with_period(period);
            let raw = self.matomo.fetch(ReportMethod::VisitsSummary, &request).await?;
            comparison.push(convert_comparison_entry(site.name, &raw));
        }

        Ok(SiteComparison {
            period: args.period.clone(),
            comparison,
        })
    }

    /// The static site directory. Never touches Matomo.
    #[must_use]
    pub const fn list_sites() -> &'static [TrackedSite] {
        TRACKED_SITES
    }
}

fn resolve_site(site: &SiteRef) -> SiteId {
    let resolution = site.resolve();
    if let Some(input) = resolution.defaulted_from() {
        tracing::warn!(
            input,
            site_id = %resolution.value(),
            "Unknown site, using default"
        );
    }
    resolution.into_value()
}

fn resolve_phrase(phrase: &str) -> PeriodParams {
    let resolution = resolve_period(phrase);
    if let Some(input) = resolution.defaulted_from() {
        tracing::warn!(
            input,
            period = resolution.value().period.as_str(),
            date = resolution.value().date.as_str(),
            "Unknown period phrase, using default"
        );
    }
    resolution.into_value()
}
