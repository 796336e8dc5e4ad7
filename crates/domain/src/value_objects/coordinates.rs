//! Coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic position with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl Coordinates {
    /// Create coordinates with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingCoordinates` if either value is not finite,
    /// latitude is not in [-90, 90] or longitude is not in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::MissingCoordinates);
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::MissingCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse coordinates from raw query parameters
    ///
    /// Both values are trimmed before parsing. Absent or empty values are
    /// rejected, as are `inf` and `NaN` spellings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingCoordinates` if either parameter is missing
    /// or does not describe a valid position.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self, DomainError> {
        let latitude = parse_degrees(latitude)?;
        let longitude = parse_degrees(longitude)?;
        Self::new(latitude, longitude)
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Unchecked wire form; deserialization goes through [`Coordinates::new`]
#[derive(Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DomainError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

fn parse_degrees(raw: Option<&str>) -> Result<f64, DomainError> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or(DomainError::MissingCoordinates)
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
