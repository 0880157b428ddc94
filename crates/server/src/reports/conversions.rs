//! Conversions from raw Matomo JSON to report records.
//!
//! Each function is total: it never fails on a partial or oddly shaped
//! body. List reports are cut to `limit` rows even when Matomo already
//! applied `filter_limit`, and are never padded.

use matomo_chat_core::{SiteId, SiteRef};
use serde_json::Value;

use super::fields::{count, decimal, first_row, label, percentage, rate, rows};
use super::types::{
    CountriesReport, CountryEntry, DeviceEntry, DevicesReport, KeywordEntry, KeywordsReport,
    LiveVisitors, PageEntry, ReferrerTypeEntry, ReferrersReport, SiteComparisonEntry,
    TopPagesReport, VisitsSummary,
};

// =============================================================================
// VisitsSummary.get
// =============================================================================

pub fn convert_visits_summary(
    site: &SiteRef,
    site_id: SiteId,
    period: &str,
    raw: &Value,
) -> VisitsSummary {
    VisitsSummary {
        site: site.clone(),
        site_id,
        period: period.to_string(),
        unique_visitors: count(raw, "nb_uniq_visitors"),
        visits: count(raw, "nb_visits"),
        actions: count(raw, "nb_actions"),
        pageviews: count(raw, "nb_pageviews"),
        avg_time_on_site: count(raw, "avg_time_on_site"),
        bounce_rate: rate(raw, "bounce_rate"),
        actions_per_visit: decimal(raw, "nb_actions_per_visit"),
    }
}

/// One comparison row, labelled with the directory name rather than the
/// caller's input.
pub fn convert_comparison_entry(name: &str, raw: &Value) -> SiteComparisonEntry {
    SiteComparisonEntry {
        site: name.to_string(),
        unique_visitors: count(raw, "nb_uniq_visitors"),
        visits: count(raw, "nb_visits"),
        pageviews: count(raw, "nb_pageviews"),
        bounce_rate: rate(raw, "bounce_rate"),
    }
}

// =============================================================================
// Live.getCounters
// =============================================================================

pub fn convert_live_visitors(site: &SiteRef, last_minutes: u32, raw: &Value) -> LiveVisitors {
    let counters = first_row(raw).unwrap_or(&Value::Null);

    LiveVisitors {
        site: site.clone(),
        last_minutes,
        visitors: count(counters, "visitors"),
        visits: count(counters, "visits"),
        actions: count(counters, "actions"),
    }
}

// =============================================================================
// List reports
// =============================================================================

pub fn convert_top_pages(site: &SiteRef, period: &str, raw: &Value, limit: usize) -> TopPagesReport {
    TopPagesReport {
        site: site.clone(),
        period: period.to_string(),
        top_pages: rows(raw)
            .iter()
            .take(limit)
            .map(|row| PageEntry {
                url: label(row),
                pageviews: count(row, "nb_hits"),
                unique_pageviews: count(row, "nb_visits"),
                avg_time_on_page: count(row, "avg_time_on_page"),
                bounce_rate: rate(row, "bounce_rate"),
            })
            .collect(),
    }
}

pub fn convert_referrers(
    site: &SiteRef,
    period: &str,
    raw: &Value,
    limit: usize,
) -> ReferrersReport {
    ReferrersReport {
        site: site.clone(),
        period: period.to_string(),
        referrer_types: rows(raw)
            .iter()
            .take(limit)
            .map(|row| ReferrerTypeEntry {
                referrer_type: label(row),
                visits: count(row, "nb_visits"),
                actions: count(row, "nb_actions"),
            })
            .collect(),
    }
}

pub fn convert_countries(
    site: &SiteRef,
    period: &str,
    raw: &Value,
    limit: usize,
) -> CountriesReport {
    CountriesReport {
        site: site.clone(),
        period: period.to_string(),
        countries: rows(raw)
            .iter()
            .take(limit)
            .map(|row| CountryEntry {
                country: label(row),
                visits: count(row, "nb_visits"),
                actions: count(row, "nb_actions"),
            })
            .collect(),
    }
}

/// Device types are few; the report is not limited.
pub fn convert_devices(site: &SiteRef, period: &str, raw: &Value) -> DevicesReport {
    DevicesReport {
        site: site.clone(),
        period: period.to_string(),
        devices: rows(raw)
            .iter()
            .map(|row| DeviceEntry {
                device_type: label(row),
                visits: count(row, "nb_visits"),
                percentage: percentage(row, "nb_visits_percentage"),
            })
            .collect(),
    }
}

pub fn convert_keywords(site: &SiteRef, period: &str, raw: &Value, limit: usize) -> KeywordsReport {
    KeywordsReport {
        site: site.clone(),
        period: period.to_string(),
        keywords: rows(raw)
            .iter()
            .take(limit)
            .map(|row| KeywordEntry {
                keyword: label(row),
                visits: count(row, "nb_visits"),
            })
            .collect(),
    }
}
