//! Open-Meteo integration
//!
//! URL construction and a time-bounded client for the Open-Meteo forecast,
//! air quality and geocoding APIs (<https://open-meteo.com>). No API key required.

pub mod client;
pub mod config;
mod error;
pub mod fields;
pub mod timeout;
mod url_builder;

pub use client::{OpenMeteoClient, UpstreamClient};
pub use config::UpstreamConfig;
pub use error::UpstreamError;
pub use url::Url;
pub use url_builder::UrlBuilder;
