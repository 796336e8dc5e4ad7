//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `cache`: upstream response cache
//!
//! Upstream endpoints and timeouts reuse `integration_weather::UpstreamConfig`.

mod cache;
mod server;

use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use integration_weather::UpstreamConfig;
use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use server::ServerConfig;

/// Prefix for environment overrides, e.g. `WEATHER_MAP_SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "WEATHER_MAP";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Open-Meteo endpoints and timeouts
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Upstream response cache
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from an optional `config.toml` and the environment
    ///
    /// Environment variables take precedence over the file.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Load from file if exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(contents, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
