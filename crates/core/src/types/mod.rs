//! Core types for the Matomo chat tools.
//!
//! This module provides type-safe wrappers for sites, periods and the
//! outcome of resolving the loose designators users type.

pub mod id;
pub mod period;
pub mod resolution;
pub mod site;

pub use id::SiteId;
pub use period::{DEFAULT_PERIOD_PHRASE, Period, PeriodDate, PeriodParams, resolve_period};
pub use resolution::Resolution;
pub use site::{
    DEFAULT_SITE_ID, DEFAULT_SITE_NAME, SiteRef, TRACKED_SITES, TrackedSite, lookup_alias,
};
