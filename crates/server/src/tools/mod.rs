//! Analytics tools exposed to a conversational agent.
//!
//! Every tool resolves a site and a period phrase, fetches one Matomo
//! report, and shapes it into a compact record. The agent picks the tool
//! by name; [`ToolCall::parse`] turns that name and its JSON arguments into
//! a typed call for [`ToolExecutor`].

mod call;
mod definitions;
mod error;
mod executor;

pub use call::{
    CompareArgs, DEFAULT_KEYWORDS_PERIOD, DEFAULT_LIMIT, DEFAULT_LIVE_MINUTES, ListArgs, LiveArgs,
    SiteArgs, TOOL_NAMES, ToolCall, ToolInvocation,
};
pub use definitions::{Tool, analytics_tools, get_tool_by_name};
pub use error::ToolError;
pub use executor::ToolExecutor;
