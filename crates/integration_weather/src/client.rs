//! Open-Meteo upstream client
//!
//! Issues one time-bounded GET per call and hands back the raw JSON body.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{config::UpstreamConfig, error::UpstreamError, timeout::with_abort_timer};

/// Fetches JSON documents from upstream
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// GET `url` and return its body once it is known to be JSON
    ///
    /// The body is returned byte-for-byte so callers can relay it unmodified.
    async fn fetch_json(&self, url: &Url) -> Result<Bytes, UpstreamError>;
}

/// reqwest-backed client for the Open-Meteo APIs
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    timeout: Duration,
}

impl OpenMeteoClient {
    /// Create a client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .user_agent(format!("weather-map/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.timeout(),
        })
    }

    /// Create a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, UpstreamError> {
        Self::new(&UpstreamConfig::default())
    }

    /// Override the total wait per call
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured total wait per call
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn get_json(&self, url: &Url) -> Result<Bytes, UpstreamError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| UpstreamError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::RequestFailed(e.to_string()))?;

        serde_json::from_slice::<serde::de::IgnoredAny>(&body)
            .map_err(|e| UpstreamError::InvalidBody(e.to_string()))?;

        Ok(body)
    }
}

#[async_trait]
impl UpstreamClient for OpenMeteoClient {
    #[instrument(skip(self), fields(host = url.host_str().unwrap_or_default(), path = url.path()))]
    async fn fetch_json(&self, url: &Url) -> Result<Bytes, UpstreamError> {
        debug!(url = %url, timeout = ?self.timeout, "Fetching upstream");

        let result = with_abort_timer(self.timeout, self.get_json(url)).await;

        match &result {
            Ok(body) => debug!(bytes = body.len(), "Upstream responded"),
            Err(UpstreamError::Timeout) => {
                warn!(timeout = ?self.timeout, "Upstream call aborted by timer");
            },
            Err(e) => warn!(error = %e, "Upstream call failed"),
        }

        result
    }
}
