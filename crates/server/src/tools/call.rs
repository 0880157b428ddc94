//! Typed tool invocations.
//!
//! An agent names a tool and passes loosely typed JSON arguments. Everything
//! past this module works with [`ToolCall`], a closed set of variants with
//! one argument struct each. Omitted arguments take their defaults.

use matomo_chat_core::{DEFAULT_PERIOD_PHRASE, SiteRef};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ToolError;

/// Default row count for list reports.
pub const DEFAULT_LIMIT: usize = 10;

/// Default live lookback window, in minutes.
pub const DEFAULT_LIVE_MINUTES: u32 = 30;

/// Keyword reports default to the month; a single day rarely has any.
pub const DEFAULT_KEYWORDS_PERIOD: &str = "month";

/// Tool names, in the order the tools are listed.
pub const TOOL_NAMES: &[&str] = &[
    "get_visits_summary",
    "get_top_pages",
    "get_referrers",
    "get_countries",
    "get_devices",
    "get_live_visitors",
    "get_search_keywords",
    "compare_sites",
    "list_sites",
];

/// Site and period, for single-record and unlimited reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteArgs {
    pub site: SiteRef,
    pub period: String,
}

impl Default for SiteArgs {
    fn default() -> Self {
        Self {
            site: SiteRef::default(),
            period: DEFAULT_PERIOD_PHRASE.to_string(),
        }
    }
}

/// Site, period and row limit, for list reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListArgs {
    pub site: SiteRef,
    pub period: String,
    pub limit: usize,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            site: SiteRef::default(),
            period: DEFAULT_PERIOD_PHRASE.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Site and lookback window for live counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveArgs {
    pub site: SiteRef,
    pub minutes: u32,
}

impl Default for LiveArgs {
    fn default() -> Self {
        Self {
            site: SiteRef::default(),
            minutes: DEFAULT_LIVE_MINUTES,
        }
    }
}

/// Period for the multi-site comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareArgs {
    pub period: String,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD_PHRASE.to_string(),
        }
    }
}

/// A tool invocation with typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    VisitsSummary(SiteArgs),
    TopPages(ListArgs),
    Referrers(ListArgs),
    Countries(ListArgs),
    Devices(SiteArgs),
    LiveVisitors(LiveArgs),
    SearchKeywords(ListArgs),
    CompareSites(CompareArgs),
    ListSites,
}

impl ToolCall {
    /// Build a call from a tool name and its JSON arguments.
    ///
    /// `input` must be an object or `null`; missing fields take their
    /// defaults and unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTool` for a name outside [`TOOL_NAMES`] and
    /// `InvalidInput` when the arguments have the wrong shape or types.
    pub fn parse(name: &str, input: &Value) -> Result<Self, ToolError> {
        let input = match input {
            Value::Null => Value::Object(serde_json::Map::new()),
            Value::Object(_) => input.clone(),
            other => {
                return Err(ToolError::invalid_input(
                    name,
                    format!("expected an object, got {}", json_type(other)),
                ));
            }
        };

        match name {
            "get_visits_summary" => args(name, input).map(Self::VisitsSummary),
            "get_top_pages" => args(name, input).map(Self::TopPages),
            "get_referrers" => args(name, input).map(Self::Referrers),
            "get_countries" => args(name, input).map(Self::Countries),
            "get_devices" => args(name, input).map(Self::Devices),
            "get_live_visitors" => args(name, input).map(Self::LiveVisitors),
            "get_search_keywords" => keyword_args(name, input).map(Self::SearchKeywords),
            "compare_sites" => args(name, input).map(Self::CompareSites),
            "list_sites" => Ok(Self::ListSites),
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }

    /// The tool name this call was parsed from.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::VisitsSummary(_) => "get_visits_summary",
            Self::TopPages(_) => "get_top_pages",
            Self::Referrers(_) => "get_referrers",
            Self::Countries(_) => "get_countries",
            Self::Devices(_) => "get_devices",
            Self::LiveVisitors(_) => "get_live_visitors",
            Self::SearchKeywords(_) => "get_search_keywords",
            Self::CompareSites(_) => "compare_sites",
            Self::ListSites => "list_sites",
        }
    }
}

/// Wire form of a tool invocation: `{"name": ..., "input": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub name: String,
    #[serde(default)]
    pub input: Value,
}

impl TryFrom<ToolInvocation> for ToolCall {
    type Error = ToolError;

    fn try_from(invocation: ToolInvocation) -> Result<Self, Self::Error> {
        Self::parse(&invocation.name, &invocation.input)
    }
}

fn args<T: serde::de::DeserializeOwned>(name: &str, input: Value) -> Result<T, ToolError> {
    serde_json::from_value(input).map_err(|e| ToolError::invalid_input(name, e.to_string()))
}

/// Like [`args`], but an omitted period means the month.
fn keyword_args(name: &str, input: Value) -> Result<ListArgs, ToolError> {
    let has_period = input.get("period").is_some();
    let mut parsed: ListArgs = args(name, input)?;
    if !has_period {
        parsed.period = DEFAULT_KEYWORDS_PERIOD.to_string();
    }
    Ok(parsed)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
