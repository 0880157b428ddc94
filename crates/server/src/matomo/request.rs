//! Report methods and request parameters.

use matomo_chat_core::{PeriodParams, SiteId};

/// Reporting API methods used by the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportMethod {
    VisitsSummary,
    PageUrls,
    ReferrerType,
    Country,
    DeviceType,
    LiveCounters,
    Keywords,
}

impl ReportMethod {
    /// The `method` parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VisitsSummary => "VisitsSummary.get",
            Self::PageUrls => "Actions.getPageUrls",
            Self::ReferrerType => "Referrers.getReferrerType",
            Self::Country => "UserCountry.getCountry",
            Self::DeviceType => "DevicesDetection.getType",
            Self::LiveCounters => "Live.getCounters",
            Self::Keywords => "Referrers.getKeywords",
        }
    }
}

impl std::fmt::Display for ReportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved parameters for a single report request.
///
/// Built per call and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    /// Matomo `idSite`.
    pub site_id: SiteId,
    /// `period`/`date` pair; absent for live counters.
    pub period: Option<PeriodParams>,
    /// Matomo `filter_limit`.
    pub filter_limit: Option<usize>,
    /// Matomo `lastMinutes`.
    pub last_minutes: Option<u32>,
}

impl ReportRequest {
    /// Create a request for a site with no period or extras.
    #[must_use]
    pub const fn new(site_id: SiteId) -> Self {
        Self {
            site_id,
            period: None,
            filter_limit: None,
            last_minutes: None,
        }
    }

    /// Set the reporting period.
    #[must_use]
    pub const fn with_period(mut self, period: PeriodParams) -> Self {
        self.period = Some(period);
        self
    }

    /// Ask Matomo to limit the number of rows.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.filter_limit = Some(limit);
        self
    }

    /// Set the live lookback window.
    #[must_use]
    pub const fn with_last_minutes(mut self, minutes: u32) -> Self {
        self.last_minutes = Some(minutes);
        self
    }

    /// Request-specific form fields (everything except module, method,
    /// format and token).
    #[must_use]
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("idSite", self.site_id.to_string())];
        if let Some(period) = self.period {
            params.push(("period", period.period.as_str().to_string()));
            params.push(("date", period.date.as_str().to_string()));
        }
        if let Some(limit) = self.filter_limit {
            params.push(("filter_limit", limit.to_string()));
        }
        if let Some(minutes) = self.last_minutes {
            params.push(("lastMinutes", minutes.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(ReportMethod::VisitsSummary.as_str(), "VisitsSummary.get");
        assert_eq!(ReportMethod::LiveCounters.to_string(), "Live.getCounters");
    }

    #[test]
    fn test_form_params_with_period_and_limit() {
        let request = ReportRequest::new(SiteId::new(5))
            .with_period(PeriodParams::LAST_7_DAYS)
            .with_limit(10);

        assert_eq!(
            request.form_params(),
            vec![
                ("idSite", "5".to_string()),
                ("period", "range".to_string()),
                ("date", "last7".to_string()),
                ("filter_limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_params_live() {
        let request = ReportRequest::new(SiteId::new(4)).with_last_minutes(30);

        assert_eq!(
            request.form_params(),
            vec![
                ("idSite", "4".to_string()),
                ("lastMinutes", "30".to_string()),
            ]
        );
    }
}
