//! Weather map HTTP presentation layer
//!
//! Read-only JSON proxies in front of Open-Meteo plus health endpoints.

pub mod error;
pub mod handlers;
pub mod proxy;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::ApiError;
pub use proxy::{AIR_QUALITY, GEOCODE, ProxyEndpoint, WEATHER};
pub use routes::{cors_layer, create_router};
pub use shutdown::{ShutdownOutcome, serve_with_deadline};
pub use state::AppState;
