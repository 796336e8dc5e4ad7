//! `/api/air`: hourly air quality

use axum::{
    extract::{RawQuery, State},
    response::Response,
};
use domain::AirQualityRequest;
use integration_weather::fields::AIR_QUALITY_HOURLY;
use tracing::{debug, instrument};

use super::CoordinateParams;
use crate::{
    error::ApiError,
    proxy::{self, AIR_QUALITY},
    state::AppState,
};

/// Proxy Open-Meteo air quality for `lat`/`lon`
#[instrument(skip(state, query))]
pub async fn air_quality(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let params = CoordinateParams::from_raw_query(query.as_deref());
    let request = AirQualityRequest::new(params.coordinates()?, params.timezone())
        .with_hourly(AIR_QUALITY_HOURLY);

    let url = state.urls.build_air_url(&request);
    debug!(coordinates = %request.coordinates, url = %url, "Air quality request");

    proxy::relay(&state, &AIR_QUALITY, url).await
}
