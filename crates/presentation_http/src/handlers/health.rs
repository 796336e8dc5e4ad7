//! Health check handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub cache: CacheStatus,
}

/// Response cache counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatus {
    pub enabled: bool,
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Readiness check
///
/// Upstream is not contacted; the server is ready as soon as it is serving.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let stats = state.cache.stats();

    Json(ReadinessResponse {
        ready: true,
        cache: CacheStatus {
            enabled: state.cache.is_enabled(),
            entries: stats.entries,
            hits: stats.hits,
            misses: stats.misses,
        },
    })
}
