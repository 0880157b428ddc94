//! Tracked sites and nickname resolution.
//!
//! Users refer to sites by nickname ("ronaldmego", "GalacticaIA") or by the
//! raw Matomo id. [`SiteRef::resolve`] turns either form into a [`SiteId`],
//! falling back to [`DEFAULT_SITE_ID`] for names it does not know.

use serde::{Deserialize, Serialize};

use super::id::SiteId;
use super::resolution::Resolution;

/// Site used when a nickname is not recognized.
pub const DEFAULT_SITE_ID: SiteId = SiteId::new(4);

/// Nickname used when the caller does not name a site.
pub const DEFAULT_SITE_NAME: &str = "ronaldmego";

/// Lower-cased nickname to site id.
///
/// Several aliases may point at the same site; every value is one of the
/// ids in [`TRACKED_SITES`].
const SITE_ALIASES: &[(&str, SiteId)] = &[
    ("ronaldmego", SiteId::new(4)),
    ("ronaldmego.com", SiteId::new(4)),
    ("personal", SiteId::new(4)),
    ("galacticaia", SiteId::new(5)),
    ("galacticaia.com", SiteId::new(5)),
    ("galactica", SiteId::new(5)),
    ("empresa", SiteId::new(5)),
    ("becgi", SiteId::new(6)),
    ("be-cgi", SiteId::new(6)),
    ("be-cgi.com", SiteId::new(6)),
];

/// A site tracked in Matomo, as shown in the site directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackedSite {
    /// Matomo site id.
    pub id: SiteId,
    /// Canonical domain name.
    pub name: &'static str,
    /// Short nicknames users commonly type.
    pub aliases: &'static [&'static str],
}

/// Directory of tracked sites, in comparison order.
pub const TRACKED_SITES: &[TrackedSite] = &[
    TrackedSite {
        id: SiteId::new(4),
        name: "ronaldmego.com",
        aliases: &["ronaldmego", "personal"],
    },
    TrackedSite {
        id: SiteId::new(5),
        name: "galacticaia.com",
        aliases: &["galacticaia", "galactica", "empresa"],
    },
    TrackedSite {
        id: SiteId::new(6),
        name: "be-cgi.com",
        aliases: &["becgi", "be-cgi"],
    },
];

/// Look up a nickname in the alias table (case-insensitive, trimmed).
#[must_use]
pub fn lookup_alias(name: &str) -> Option<SiteId> {
    let key = name.trim().to_lowercase();
    SITE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, id)| *id)
}

/// A site designator as supplied by a caller: a raw id or a nickname.
///
/// Serializes back to the same JSON form it was read from, so results can
/// echo exactly what was asked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SiteRef {
    /// An already-resolved Matomo site id.
    Id(SiteId),
    /// A nickname or domain to look up.
    Name(String),
}

impl SiteRef {
    /// Resolve to a Matomo site id.
    ///
    /// Ids pass through unchanged without validation. Unknown names resolve
    /// to [`DEFAULT_SITE_ID`].
    #[must_use]
    pub fn resolve(&self) -> Resolution<SiteId> {
        match self {
            Self::Id(id) => Resolution::Resolved(*id),
            Self::Name(name) => lookup_alias(name).map_or_else(
                || Resolution::Defaulted {
                    value: DEFAULT_SITE_ID,
                    input: name.clone(),
                },
                Resolution::Resolved,
            ),
        }
    }

    /// Shorthand for `self.resolve().into_value()`.
    #[must_use]
    pub fn site_id(&self) -> SiteId {
        self.resolve().into_value()
    }
}

impl Default for SiteRef {
    fn default() -> Self {
        Self::Name(DEFAULT_SITE_NAME.to_string())
    }
}

impl std::fmt::Display for SiteRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for SiteRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SiteRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<SiteId> for SiteRef {
    fn from(id: SiteId) -> Self {
        Self::Id(id)
    }
}
