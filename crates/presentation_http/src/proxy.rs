//! Shared fetch-and-relay flow for the three proxy endpoints
//!
//! Each endpoint is described by a [`ProxyEndpoint`]: its error messages,
//! the caching directive sent on success and how long a successful upstream
//! body is reused.

use std::time::Duration;

use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use integration_weather::{Url, UpstreamError};
use tracing::{debug, warn};

use crate::{error::ApiError, state::AppState};

/// Static description of one proxy endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyEndpoint {
    /// Short name used in logs
    pub name: &'static str,
    /// Message when the upstream call is aborted by the timer
    pub timeout_message: &'static str,
    /// Message for network and body failures
    pub failure_message: &'static str,
    /// `cache-control` value on success
    pub cache_control: &'static str,
    /// How long a successful body stays in the response cache
    pub revalidate: Duration,
}

/// `/api/weather`
pub const WEATHER: ProxyEndpoint = ProxyEndpoint {
    name: "weather",
    timeout_message: "Weather fetch timed out",
    failure_message: "Weather fetch failed",
    cache_control: "public, s-maxage=600, stale-while-revalidate=600",
    revalidate: Duration::from_secs(600),
};

/// `/api/air`
pub const AIR_QUALITY: ProxyEndpoint = ProxyEndpoint {
    name: "air",
    timeout_message: "Air quality fetch timed out",
    failure_message: "Air quality fetch failed",
    cache_control: "public, s-maxage=1800, stale-while-revalidate=600",
    revalidate: Duration::from_secs(1800),
};

/// `/api/geocode`
pub const GEOCODE: ProxyEndpoint = ProxyEndpoint {
    name: "geocode",
    timeout_message: "Geocoding fetch timed out",
    failure_message: "Geocoding failed",
    cache_control: "public, s-maxage=3600, stale-while-revalidate=600",
    revalidate: Duration::from_secs(3600),
};

impl ProxyEndpoint {
    /// Caller-facing message for an upstream failure
    #[must_use]
    pub fn message_for(&self, err: &UpstreamError) -> String {
        match err {
            UpstreamError::Timeout => self.timeout_message.to_string(),
            UpstreamError::Status(code) => format!("Upstream {code}"),
            _ => self.failure_message.to_string(),
        }
    }

    /// Wrap an upstream failure into the 502 response error
    #[must_use]
    pub fn upstream_error(&self, source: UpstreamError) -> ApiError {
        ApiError::Upstream {
            message: self.message_for(&source),
            source,
        }
    }

    /// 200 response relaying `body` unchanged
    #[must_use]
    pub fn success(&self, body: Bytes) -> Response {
        (
            [
                (CONTENT_TYPE, "application/json"),
                (CACHE_CONTROL, self.cache_control),
            ],
            body,
        )
            .into_response()
    }
}

/// Answer from the cache, or fetch `url` once and relay the body
pub async fn relay(
    state: &AppState,
    endpoint: &ProxyEndpoint,
    url: Url,
) -> Result<Response, ApiError> {
    if let Some(body) = state.cache.get(url.as_str()).await {
        debug!(endpoint = endpoint.name, "Serving cached upstream body");
        return Ok(endpoint.success(body));
    }

    let body = state.upstream.fetch_json(&url).await.map_err(|e| {
        warn!(endpoint = endpoint.name, error = %e, "Proxy request failed");
        endpoint.upstream_error(e)
    })?;

    state
        .cache
        .insert(url.as_str(), body.clone(), endpoint.revalidate)
        .await;

    Ok(endpoint.success(body))
}
