//! Domain layer for the weather map proxy
//!
//! Value objects and request types shared by the upstream integration and the
//! HTTP layer. No I/O happens here.

pub mod errors;
pub mod requests;
pub mod value_objects;

pub use errors::DomainError;
pub use requests::{AirQualityRequest, ForecastRequest, GeocodeRequest};
pub use value_objects::*;
