//! Reporting periods and bilingual period phrases.
//!
//! Matomo reports take a `period` (`day`, `week`, ...) and a `date`
//! (`today`, `last7`, ...). Users instead say "last 7 days" or
//! "esta semana"; [`resolve_period`] maps those phrases onto the pair.

use serde::{Deserialize, Serialize};

use super::resolution::Resolution;

/// Phrase used when the caller does not name a period.
pub const DEFAULT_PERIOD_PHRASE: &str = "today";

/// Matomo `period` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
    Range,
}

impl Period {
    /// Value sent to the Reporting API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Range => "range",
        }
    }
}

/// Matomo `date` parameter, limited to the values the phrase table produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodDate {
    Today,
    Yesterday,
    Last7,
    Last30,
}

impl PeriodDate {
    /// Value sent to the Reporting API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Last7 => "last7",
            Self::Last30 => "last30",
        }
    }
}

/// A resolved `{period, date}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodParams {
    pub period: Period,
    pub date: PeriodDate,
}

impl PeriodParams {
    pub const TODAY: Self = Self::new(Period::Day, PeriodDate::Today);
    pub const YESTERDAY: Self = Self::new(Period::Day, PeriodDate::Yesterday);
    pub const THIS_WEEK: Self = Self::new(Period::Week, PeriodDate::Today);
    pub const THIS_MONTH: Self = Self::new(Period::Month, PeriodDate::Today);
    pub const THIS_YEAR: Self = Self::new(Period::Year, PeriodDate::Today);
    pub const LAST_7_DAYS: Self = Self::new(Period::Range, PeriodDate::Last7);
    pub const LAST_30_DAYS: Self = Self::new(Period::Range, PeriodDate::Last30);

    #[must_use]
    pub const fn new(period: Period, date: PeriodDate) -> Self {
        Self { period, date }
    }
}

impl Default for PeriodParams {
    fn default() -> Self {
        Self::TODAY
    }
}

/// Lower-cased phrase (English or Spanish) to period pair.
const PERIOD_PHRASES: &[(&str, PeriodParams)] = &[
    ("today", PeriodParams::TODAY),
    ("hoy", PeriodParams::TODAY),
    ("yesterday", PeriodParams::YESTERDAY),
    ("ayer", PeriodParams::YESTERDAY),
    ("week", PeriodParams::THIS_WEEK),
    ("semana", PeriodParams::THIS_WEEK),
    ("this week", PeriodParams::THIS_WEEK),
    ("esta semana", PeriodParams::THIS_WEEK),
    ("month", PeriodParams::THIS_MONTH),
    ("mes", PeriodParams::THIS_MONTH),
    ("this month", PeriodParams::THIS_MONTH),
    ("este mes", PeriodParams::THIS_MONTH),
    ("year", PeriodParams::THIS_YEAR),
    ("año", PeriodParams::THIS_YEAR),
    ("this year", PeriodParams::THIS_YEAR),
    ("este año", PeriodParams::THIS_YEAR),
    ("last 7 days", PeriodParams::LAST_7_DAYS),
    ("últimos 7 días", PeriodParams::LAST_7_DAYS),
    ("7 days", PeriodParams::LAST_7_DAYS),
    ("7 días", PeriodParams::LAST_7_DAYS),
    ("last 30 days", PeriodParams::LAST_30_DAYS),
    ("últimos 30 días", PeriodParams::LAST_30_DAYS),
    ("30 days", PeriodParams::LAST_30_DAYS),
    ("30 días", PeriodParams::LAST_30_DAYS),
];

/// Resolve a period phrase to the pair the Reporting API expects.
///
/// Matching is exact after lower-casing; surrounding whitespace is kept, so
/// `" ayer "` is not a known phrase. Anything else resolves to
/// [`PeriodParams::TODAY`], tagged as defaulted.
#[must_use]
pub fn resolve_period(phrase: &str) -> Resolution<PeriodParams> {
    let key = phrase.to_lowercase();
    PERIOD_PHRASES
        .iter()
        .find(|(p, _)| *p == key)
        .map_or_else(
            || Resolution::Defaulted {
                value: PeriodParams::TODAY,
                input: phrase.to_string(),
            },
            |(_, params)| Resolution::Resolved(*params),
        )
}
