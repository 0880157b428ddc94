//! Report records returned by the tools.
//!
//! Every record echoes the site and period exactly as the caller gave them,
//! next to the normalized numbers, so a consumer can show "what was asked"
//! without re-deriving it.

use matomo_chat_core::{SiteId, SiteRef};
use serde::{Deserialize, Serialize};

// =============================================================================
// Visits
// =============================================================================

/// Headline traffic numbers for one site and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitsSummary {
    /// Site as given by the caller.
    pub site: SiteRef,
    /// Resolved Matomo site id.
    pub site_id: SiteId,
    /// Period phrase as given by the caller.
    pub period: String,
    pub unique_visitors: u64,
    pub visits: u64,
    pub actions: u64,
    pub pageviews: u64,
    /// Average visit duration in seconds.
    pub avg_time_on_site: u64,
    /// Matomo-formatted rate, e.g. `"45%"`.
    pub bounce_rate: String,
    pub actions_per_visit: f64,
}

/// Live counters for the last N minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveVisitors {
    /// Site as given by the caller.
    pub site: SiteRef,
    /// Lookback window in minutes.
    pub last_minutes: u32,
    pub visitors: u64,
    pub visits: u64,
    pub actions: u64,
}

// =============================================================================
// Pages
// =============================================================================

/// One row of the page URL report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Page label (path segment or URL).
    pub url: String,
    pub pageviews: u64,
    pub unique_pageviews: u64,
    /// Average time on page in seconds.
    pub avg_time_on_page: u64,
    pub bounce_rate: String,
}

/// Most visited pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPagesReport {
    pub site: SiteRef,
    pub period: String,
    pub top_pages: Vec<PageEntry>,
}

// =============================================================================
// Acquisition
// =============================================================================

/// Visits per referrer channel (direct, search engines, websites, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerTypeEntry {
    #[serde(rename = "type")]
    pub referrer_type: String,
    pub visits: u64,
    pub actions: u64,
}

/// Traffic sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrersReport {
    pub site: SiteRef,
    pub period: String,
    pub referrer_types: Vec<ReferrerTypeEntry>,
}

/// Visits per search keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub visits: u64,
}

/// Search keywords that brought visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsReport {
    pub site: SiteRef,
    pub period: String,
    pub keywords: Vec<KeywordEntry>,
}

// =============================================================================
// Audience
// =============================================================================

/// Visits per visitor country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub country: String,
    pub visits: u64,
    pub actions: u64,
}

/// Visitor countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountriesReport {
    pub site: SiteRef,
    pub period: String,
    pub countries: Vec<CountryEntry>,
}

/// Visits per device type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEntry {
    #[serde(rename = "type")]
    pub device_type: String,
    pub visits: u64,
    /// Share of visits, in percent.
    pub percentage: f64,
}

/// Device type breakdown (desktop, smartphone, tablet, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicesReport {
    pub site: SiteRef,
    pub period: String,
    pub devices: Vec<DeviceEntry>,
}

// =============================================================================
// Comparison
// =============================================================================

/// Summary row for one site in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteComparisonEntry {
    /// Site domain name from the directory.
    pub site: String,
    pub unique_visitors: u64,
    pub visits: u64,
    pub pageviews: u64,
    pub bounce_rate: String,
}

/// Side-by-side summary of all tracked sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteComparison {
    pub period: String,
    pub comparison: Vec<SiteComparisonEntry>,
}
