//! Matomo site id newtype.

use serde::{Deserialize, Serialize};

/// A Matomo site identifier (`idSite` in the Reporting API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(i32);

impl SiteId {
    /// Create a new site ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SiteId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<SiteId> for i32 {
    fn from(id: SiteId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_id_display() {
        assert_eq!(SiteId::new(5).to_string(), "5");
    }

    #[test]
    fn test_site_id_serde_transparent() {
        let id = SiteId::new(6);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "6");

        let parsed: SiteId = serde_json::from_str("4").expect("deserialize");
        assert_eq!(parsed, SiteId::new(4));
    }

    #[test]
    fn test_site_id_conversions() {
        let id: SiteId = 7.into();
        let raw: i32 = id.into();
        assert_eq!(raw, 7);
        assert_eq!(id.as_i32(), 7);
    }
}
