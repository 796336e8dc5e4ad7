//! `/api/weather`: current conditions, hourly and daily forecast

use axum::{
    extract::{RawQuery, State},
    response::Response,
};
use domain::ForecastRequest;
use integration_weather::fields::{FORECAST_CURRENT, FORECAST_DAILY, FORECAST_HOURLY};
use tracing::{debug, instrument};

use super::CoordinateParams;
use crate::{
    error::ApiError,
    proxy::{self, WEATHER},
    state::AppState,
};

/// Proxy an Open-Meteo forecast for `lat`/`lon`
#[instrument(skip(state, query))]
pub async fn forecast(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let params = CoordinateParams::from_raw_query(query.as_deref());
    let request = ForecastRequest::new(params.coordinates()?, params.timezone())
        .with_current(FORECAST_CURRENT)
        .with_hourly(FORECAST_HOURLY)
        .with_daily(FORECAST_DAILY);

    let url = state.urls.build_forecast_url(&request);
    debug!(coordinates = %request.coordinates, url = %url, "Forecast request");

    proxy::relay(&state, &WEATHER, url).await
}
