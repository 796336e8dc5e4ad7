//! Application state shared across handlers

use std::sync::Arc;

use infrastructure::{AppConfig, ResponseCache};
use integration_weather::{OpenMeteoClient, UpstreamClient, UpstreamError, UrlBuilder};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Upstream URL construction
    pub urls: Arc<UrlBuilder>,
    /// Client used for every outbound call
    pub upstream: Arc<dyn UpstreamClient>,
    /// Successful upstream bodies by URL
    pub cache: Arc<ResponseCache>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("urls", &self.urls)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Assemble state from parts
    #[must_use]
    pub fn new(
        urls: UrlBuilder,
        upstream: Arc<dyn UpstreamClient>,
        cache: Arc<ResponseCache>,
    ) -> Self {
        Self {
            urls: Arc::new(urls),
            upstream,
            cache,
        }
    }

    /// Build the production state: Open-Meteo client plus configured cache
    pub fn from_config(config: &AppConfig) -> Result<Self, UpstreamError> {
        let urls = UrlBuilder::new(&config.upstream)?;
        let client = OpenMeteoClient::new(&config.upstream)?;

        Ok(Self::new(
            urls,
            Arc::new(client),
            Arc::new(ResponseCache::new(&config.cache)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let state = AppState::from_config(&AppConfig::default()).unwrap();
        assert!(state.cache.is_enabled());
        assert_eq!(state.cache.entry_count(), 0);
    }

    #[test]
    fn from_config_rejects_bad_base_url() {
        let mut config = AppConfig::default();
        config.upstream.geocoding_base_url = "not a url".to_string();

        let err = AppState::from_config(&config).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn disabled_cache_from_config() {
        let mut config = AppConfig::default();
        config.cache.enabled = false;

        let state = AppState::from_config(&config).unwrap();
        assert!(!state.cache.is_enabled());
    }

    #[test]
    fn debug_omits_client() {
        let state = AppState::from_config(&AppConfig::default()).unwrap();
        let debug = format!("{state:?}");
        assert!(debug.contains("AppState"));
        assert!(debug.contains("ResponseCache"));
    }
}
