//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::MatomoConfig;
use crate::matomo::{MatomoClient, MatomoError};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    matomo: MatomoClient,
}

impl AppState {
    /// Build state from the Matomo section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the Matomo HTTP client fails to build.
    pub fn new(config: &MatomoConfig) -> Result<Self, MatomoError> {
        MatomoClient::new(config).map(Self::with_client)
    }

    /// Build state around an existing Matomo client.
    #[must_use]
    pub fn with_client(matomo: MatomoClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner { matomo }),
        }
    }

    #[must_use]
    pub fn matomo(&self) -> &MatomoClient {
        &self.inner.matomo
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_state_shares_one_client() {
        let config = MatomoConfig::new("https://stats.example.com/", None).unwrap();
        let state = AppState::new(&config).unwrap();
        let cloned = state.clone();

        assert_eq!(state.matomo().endpoint(), config.endpoint());
        assert!(Arc::ptr_eq(&state.inner, &cloned.inner));
    }
}
