//! Request value objects for the three upstream resources
//!
//! Each request is built once from validated inputs and lives only for the
//! duration of a single proxied call.

use crate::{
    errors::DomainError,
    value_objects::{Coordinates, FieldGroup, GeocodeQuery, Timezone},
};

/// Number of geocoding results when the caller does not ask for a count
pub const DEFAULT_GEOCODE_COUNT: u8 = 5;

/// Largest result count Open-Meteo geocoding accepts
pub const MAX_GEOCODE_COUNT: u8 = 100;

/// Language used for place names when none is given
pub const DEFAULT_LANGUAGE: &str = "en";

/// Forecast lookup for a position
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    /// Where to forecast
    pub coordinates: Coordinates,
    /// Timezone for returned timestamps
    pub timezone: Timezone,
    /// Fields for the `current` block
    pub current: FieldGroup,
    /// Fields for the `hourly` block
    pub hourly: FieldGroup,
    /// Fields for the `daily` block
    pub daily: FieldGroup,
}

impl ForecastRequest {
    /// Create a request with all field groups empty
    #[must_use]
    pub fn new(coordinates: Coordinates, timezone: Timezone) -> Self {
        Self {
            coordinates,
            timezone,
            current: FieldGroup::empty(),
            hourly: FieldGroup::empty(),
            daily: FieldGroup::empty(),
        }
    }

    /// Set the `current` fields
    #[must_use]
    pub const fn with_current(mut self, fields: FieldGroup) -> Self {
        self.current = fields;
        self
    }

    /// Set the `hourly` fields
    #[must_use]
    pub const fn with_hourly(mut self, fields: FieldGroup) -> Self {
        self.hourly = fields;
        self
    }

    /// Set the `daily` fields
    #[must_use]
    pub const fn with_daily(mut self, fields: FieldGroup) -> Self {
        self.daily = fields;
        self
    }
}

/// Air quality lookup for a position
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityRequest {
    /// Where to measure
    pub coordinates: Coordinates,
    /// Timezone for returned timestamps
    pub timezone: Timezone,
    /// Fields for the `hourly` block
    pub hourly: FieldGroup,
}

impl AirQualityRequest {
    /// Create a request with an empty `hourly` group
    #[must_use]
    pub fn new(coordinates: Coordinates, timezone: Timezone) -> Self {
        Self {
            coordinates,
            timezone,
            hourly: FieldGroup::empty(),
        }
    }

    /// Set the `hourly` fields
    #[must_use]
    pub const fn with_hourly(mut self, fields: FieldGroup) -> Self {
        self.hourly = fields;
        self
    }
}

/// Place name search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    /// Text to search for
    pub query: GeocodeQuery,
    /// Maximum number of results (1-100)
    pub count: u8,
    /// Language code for place names
    pub language: String,
}

impl GeocodeRequest {
    /// Create a search with default count and language
    #[must_use]
    pub fn new(query: GeocodeQuery) -> Self {
        Self {
            query,
            count: DEFAULT_GEOCODE_COUNT,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Build a search from raw query parameters
    ///
    /// `count` falls back to 5 when absent, zero or not a positive whole
    /// number, and is capped at 100. `language` falls back to `en` when absent or empty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::QueryTooShort` if the query is missing or too short.
    pub fn from_params(
        query: Option<&str>,
        count: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self, DomainError> {
        let query = GeocodeQuery::from_param(query)?;

        let count = count
            .map(str::trim)
            .and_then(|c| c.parse::<u32>().ok())
            .filter(|&c| c > 0)
            .map_or(DEFAULT_GEOCODE_COUNT, |c| {
                u8::try_from(c.min(u32::from(MAX_GEOCODE_COUNT))).unwrap_or(MAX_GEOCODE_COUNT)
            });

        let language = language
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string();

        Ok(Self {
            query,
            count,
            language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOURLY: &[&str] = &["pm10", "ozone"];

    fn berlin() -> Coordinates {
        Coordinates::new(52.52, 13.41).unwrap()
    }

    #[test]
    fn forecast_request_starts_empty() {
        let req = ForecastRequest::new(berlin(), Timezone::auto());
        assert!(req.current.is_empty());
        assert!(req.hourly.is_empty());
        assert!(req.daily.is_empty());
    }

    #[test]
    fn forecast_request_builder_sets_groups() {
        let req = ForecastRequest::new(berlin(), Timezone::auto())
            .with_current(FieldGroup::new(&["temperature_2m"]))
            .with_daily(FieldGroup::new(&["sunrise", "sunset"]));
        assert_eq!(req.current.fields(), &["temperature_2m"]);
        assert!(req.hourly.is_empty());
        assert_eq!(req.daily.fields(), &["sunrise", "sunset"]);
    }

    #[test]
    fn air_request_sets_hourly() {
        let req = AirQualityRequest::new(berlin(), Timezone::new("Europe/Berlin"))
            .with_hourly(FieldGroup::new(HOURLY));
        assert_eq!(req.hourly.fields(), HOURLY);
        assert_eq!(req.timezone.as_str(), "Europe/Berlin");
    }

    #[test]
    fn geocode_defaults() {
        let req = GeocodeRequest::from_params(Some("Paris"), None, None).unwrap();
        assert_eq!(req.query.as_str(), "Paris");
        assert_eq!(req.count, 5);
        assert_eq!(req.language, "en");
    }

    #[test]
    fn geocode_explicit_values() {
        let req = GeocodeRequest::from_params(Some("Paris"), Some("10"), Some("fr")).unwrap();
        assert_eq!(req.count, 10);
        assert_eq!(req.language, "fr");
    }

    #[test]
    fn geocode_count_fallback_and_clamp() {
        let req = GeocodeRequest::from_params(Some("Paris"), Some("lots"), None).unwrap();
        assert_eq!(req.count, DEFAULT_GEOCODE_COUNT);

        let req = GeocodeRequest::from_params(Some("Paris"), Some("-3"), None).unwrap();
        assert_eq!(req.count, DEFAULT_GEOCODE_COUNT);

        let req = GeocodeRequest::from_params(Some("Paris"), Some("2.5"), None).unwrap();
        assert_eq!(req.count, DEFAULT_GEOCODE_COUNT);

        let req = GeocodeRequest::from_params(Some("Paris"), Some("1"), None).unwrap();
        assert_eq!(req.count, 1);

        let req = GeocodeRequest::from_params(Some("Paris"), Some("5000"), None).unwrap();
        assert_eq!(req.count, MAX_GEOCODE_COUNT);
    }

    #[test]
    fn geocode_zero_count_uses_default() {
        let req = GeocodeRequest::from_params(Some("Paris"), Some("0"), None).unwrap();
        assert_eq!(req.count, DEFAULT_GEOCODE_COUNT);

        let req = GeocodeRequest::from_params(Some("Paris"), Some(" 000 "), None).unwrap();
        assert_eq!(req.count, DEFAULT_GEOCODE_COUNT);
    }

    #[test]
    fn geocode_empty_language_defaults() {
        let req = GeocodeRequest::from_params(Some("Paris"), Some(""), Some("")).unwrap();
        assert_eq!(req.count, DEFAULT_GEOCODE_COUNT);
        assert_eq!(req.language, "en");
    }

    #[test]
    fn geocode_rejects_short_query() {
        let result = GeocodeRequest::from_params(Some(" x "), None, None);
        assert!(matches!(result, Err(DomainError::QueryTooShort)));
    }
}
