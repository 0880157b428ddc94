//! Report records and the conversions that build them from raw Matomo JSON.

mod conversions;
mod fields;
mod types;

pub use conversions::{
    convert_comparison_entry, convert_countries, convert_devices, convert_keywords,
    convert_live_visitors, convert_referrers, convert_top_pages, convert_visits_summary,
};
pub use types::*;
