//! Query string parameters
//!
//! The raw query is decoded by hand so a repeated key never fails the whole
//! request: the first occurrence wins and later ones are ignored. Every field
//! stays optional text, so bad values reach domain validation and produce the
//! endpoint's own 400 message.

use domain::{Coordinates, DomainError, GeocodeRequest, Timezone};
use url::form_urlencoded;

/// `lat`, `lon` and optional `tz`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub tz: Option<String>,
}

impl CoordinateParams {
    /// Decode from the raw query string, keeping the first value per key
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs(raw) {
            let slot = match key.as_ref() {
                "lat" => &mut params.lat,
                "lon" => &mut params.lon,
                "tz" => &mut params.tz,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }
        params
    }

    pub fn coordinates(&self) -> Result<Coordinates, DomainError> {
        Coordinates::parse(self.lat.as_deref(), self.lon.as_deref())
    }

    pub fn timezone(&self) -> Timezone {
        Timezone::from_param(self.tz.as_deref())
    }
}

/// `q` with optional `count` and `language`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeParams {
    pub q: Option<String>,
    pub count: Option<String>,
    pub language: Option<String>,
}

impl GeocodeParams {
    /// Decode from the raw query string, keeping the first value per key
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs(raw) {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "count" => &mut params.count,
                "language" => &mut params.language,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }
        params
    }

    pub fn request(&self) -> Result<GeocodeRequest, DomainError> {
        GeocodeRequest::from_params(
            self.q.as_deref(),
            self.count.as_deref(),
            self.language.as_deref(),
        )
    }
}

fn pairs(raw: Option<&str>) -> form_urlencoded::Parse<'_> {
    form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
}
