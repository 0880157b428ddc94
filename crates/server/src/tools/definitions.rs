//! Tool definitions handed to a language model.
//!
//! Each definition pairs a tool name with a description and a JSON schema
//! for its input. All arguments are optional.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::call::{DEFAULT_KEYWORDS_PERIOD, DEFAULT_LIMIT, DEFAULT_LIVE_MINUTES};

/// A tool the agent may call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Name of the tool.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

const SITE_DESCRIPTION: &str =
    "Site nickname (ronaldmego, galacticaia, becgi), domain, or numeric Matomo id. Default: ronaldmego";

const PERIOD_DESCRIPTION: &str = "Time period in English or Spanish: today/hoy, yesterday/ayer, \
     week/semana, month/mes, year/año, last 7 days/últimos 7 días, last 30 days/últimos 30 días";

fn site_property() -> Value {
    json!({
        "oneOf": [{"type": "string"}, {"type": "integer"}],
        "description": SITE_DESCRIPTION
    })
}

fn period_property(default: &str) -> Value {
    json!({
        "type": "string",
        "description": format!("{PERIOD_DESCRIPTION}. Default: {default}")
    })
}

fn limit_property() -> Value {
    json!({
        "type": "integer",
        "description": format!("Maximum number of rows (default {DEFAULT_LIMIT})"),
        "minimum": 1
    })
}

/// Get all analytics tools, in listing order.
#[must_use]
pub fn analytics_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_visits_summary".to_string(),
            description: "Get the visit summary for a site: unique visitors, visits, actions, pageviews, average time on site, bounce rate and actions per visit.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "site": site_property(),
                    "period": period_property("today")
                }
            }),
        },
        Tool {
            name: "get_top_pages".to_string(),
            description: "Get the most visited pages of a site with pageviews, unique pageviews, average time on page and bounce rate.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "site": site_property(),
                    "period": period_property("today"),
                    "limit": limit_property()
                }
            }),
        },
        Tool {
            name: "get_referrers".to_string(),
            description: "Get traffic sources of a site by channel (direct entry, search engines, websites, social networks, campaigns).".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "site": site_property(),
                    "period": period_property("today"),
                    "limit": limit_property()
                }
            }),
        },
        Tool {
            name: "get_countries".to_string(),
            description: "Get the countries visitors of a site come from, with visits and actions per country.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "site": site_property(),
                    "period": period_property("today"),
                    "limit": limit_property()
                }
            }),
        },
        Tool {
            name: "get_devices".to_string(),
            description: "Get the device types visitors of a site use (desktop, smartphone, tablet, ...) with visits and share of visits.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "site": site_property(),
                    "period": period_property("today")
                }
            }),
        },
        Tool {
            name: "get_live_visitors".to_string(),
            description: "Get live counters for a site: visitors, visits and actions in the last N minutes.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "site": site_property(),
                    "minutes": {
                        "type": "integer",
                        "description": format!("Lookback window in minutes (default {DEFAULT_LIVE_MINUTES})"),
                        "minimum": 1
                    }
                }
            }),
        },
        Tool {
            name: "get_search_keywords".to_string(),
            description: "Get the search keywords that brought visitors to a site.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "site": site_property(),
                    "period": period_property(DEFAULT_KEYWORDS_PERIOD),
                    "limit": limit_property()
                }
            }),
        },
        Tool {
            name: "compare_sites".to_string(),
            description: "Compare all tracked sites side by side: unique visitors, visits, pageviews and bounce rate for each.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "period": period_property("today")
                }
            }),
        },
        Tool {
            name: "list_sites".to_string(),
            description: "List the tracked sites with their Matomo ids and the nicknames that can be used to refer to them.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}

/// Get a tool by name.
#[must_use]
pub fn get_tool_by_name(name: &str) -> Option<Tool> {
    analytics_tools().into_iter().find(|t| t.name == name)
}
