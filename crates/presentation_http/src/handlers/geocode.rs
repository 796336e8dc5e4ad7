//! `/api/geocode`: place name search

use axum::{
    extract::{RawQuery, State},
    response::Response,
};
use tracing::{debug, instrument};

use super::GeocodeParams;
use crate::{
    error::ApiError,
    proxy::{self, GEOCODE},
    state::AppState,
};

/// Proxy an Open-Meteo geocoding search for `q`
#[instrument(skip(state, query))]
pub async fn search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let request = GeocodeParams::from_raw_query(query.as_deref()).request()?;

    let url = state.urls.build_geocode_url(&request);
    debug!(query = request.query.as_str(), count = request.count, url = %url, "Geocode request");

    proxy::relay(&state, &GEOCODE, url).await
}
