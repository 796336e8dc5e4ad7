//! HTTP request handlers

pub mod air;
pub mod geocode;
pub mod health;
mod params;
pub mod weather;

pub use params::{CoordinateParams, GeocodeParams};
