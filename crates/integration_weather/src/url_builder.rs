//! Open-Meteo URL construction
//!
//! Pure functions from request value objects to upstream URLs. Query values
//! are form-encoded, so a comma-joined field group appears as `a%2Cb`.

use domain::{AirQualityRequest, Coordinates, FieldGroup, ForecastRequest, GeocodeRequest};
use url::{Url, UrlQuery, form_urlencoded::Serializer};

use crate::{config::UpstreamConfig, error::UpstreamError};

/// Builds upstream URLs against fixed endpoint bases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    forecast: Url,
    air_quality: Url,
    geocode: Url,
}

impl UrlBuilder {
    /// Resolve the three endpoint URLs from configured bases
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::InvalidBaseUrl` if a base cannot be parsed.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            forecast: endpoint("forecast", &config.forecast_base_url, "forecast")?,
            air_quality: endpoint("air quality", &config.air_quality_base_url, "air-quality")?,
            geocode: endpoint("geocoding", &config.geocoding_base_url, "search")?,
        })
    }

    /// Forecast URL: coordinates, non-empty field groups, timezone
    #[must_use]
    pub fn build_forecast_url(&self, request: &ForecastRequest) -> Url {
        let mut url = self.forecast.clone();
        {
            let mut query = url.query_pairs_mut();
            append_coordinates(&mut query, &request.coordinates);
            append_group(&mut query, "current", &request.current);
            append_group(&mut query, "hourly", &request.hourly);
            append_group(&mut query, "daily", &request.daily);
            query.append_pair("timezone", request.timezone.as_str());
        }
        url
    }

    /// Air quality URL: coordinates, `hourly` group if non-empty, timezone
    #[must_use]
    pub fn build_air_url(&self, request: &AirQualityRequest) -> Url {
        let mut url = self.air_quality.clone();
        {
            let mut query = url.query_pairs_mut();
            append_coordinates(&mut query, &request.coordinates);
            append_group(&mut query, "hourly", &request.hourly);
            query.append_pair("timezone", request.timezone.as_str());
        }
        url
    }

    /// Geocoding URL: name, count, language and `format=json`
    #[must_use]
    pub fn build_geocode_url(&self, request: &GeocodeRequest) -> Url {
        let mut url = self.geocode.clone();
        url.query_pairs_mut()
            .append_pair("name", request.query.as_str())
            .append_pair("count", &request.count.to_string())
            .append_pair("language", &request.language)
            .append_pair("format", "json");
        url
    }
}

fn endpoint(api: &'static str, base: &str, path: &str) -> Result<Url, UpstreamError> {
    let raw = format!("{}/{path}", base.trim_end_matches('/'));
    Url::parse(&raw).map_err(|e| UpstreamError::InvalidBaseUrl {
        api,
        reason: e.to_string(),
    })
}

fn append_coordinates(query: &mut Serializer<'_, UrlQuery<'_>>, coordinates: &Coordinates) {
    query.append_pair("latitude", &coordinates.latitude().to_string());
    query.append_pair("longitude", &coordinates.longitude().to_string());
}

fn append_group(query: &mut Serializer<'_, UrlQuery<'_>>, name: &str, group: &FieldGroup) {
    if let Some(joined) = group.joined() {
        query.append_pair(name, &joined);
    }
}
