//! Upstream configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Open-Meteo endpoints and request limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Air quality API base URL (default: <https://air-quality-api.open-meteo.com/v1>)
    #[serde(default = "default_air_quality_base_url")]
    pub air_quality_base_url: String,

    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Upper bound on a whole upstream call in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds (default: 5)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_air_quality_base_url() -> String {
    "https://air-quality-api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_connect_timeout() -> u64 {
    5
}

impl UpstreamConfig {
    /// Point all three APIs at one base URL (mock servers, self-hosted instances)
    #[must_use]
    pub fn with_single_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            forecast_base_url: base_url.clone(),
            air_quality_base_url: base_url.clone(),
            geocoding_base_url: base_url,
            ..Self::default()
        }
    }

    /// Total wait allowed for one upstream call
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout for the HTTP client
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            air_quality_base_url: default_air_quality_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}
