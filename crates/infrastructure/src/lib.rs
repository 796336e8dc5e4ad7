//! Infrastructure layer
//!
//! Configuration loading, logging setup and the upstream response cache
//! used by the HTTP server.

pub mod cache;
pub mod config;
pub mod telemetry;

pub use cache::{CacheStats, ResponseCache};
pub use config::{AppConfig, CacheConfig, ENV_PREFIX, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_logging};
