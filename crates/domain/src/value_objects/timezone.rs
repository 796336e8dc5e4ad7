//! Timezone value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier sent upstream when the caller does not pick a timezone
pub const AUTO_TIMEZONE: &str = "auto";

/// A timezone as understood by Open-Meteo: an IANA name or `auto`
///
/// Not validated against the IANA database; upstream decides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timezone(String);

impl Timezone {
    /// Create a timezone, falling back to `auto` for an empty string
    #[must_use]
    pub fn new(tz: impl Into<String>) -> Self {
        let tz = tz.into();
        if tz.is_empty() { Self::auto() } else { Self(tz) }
    }

    /// Build from an optional query parameter
    ///
    /// Absent and empty values both resolve to `auto`.
    #[must_use]
    pub fn from_param(tz: Option<&str>) -> Self {
        tz.map_or_else(Self::auto, Self::new)
    }

    /// Let upstream resolve the timezone from the coordinates
    #[must_use]
    pub fn auto() -> Self {
        Self(AUTO_TIMEZONE.to_string())
    }

    /// Get the timezone string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if upstream resolves the timezone
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.0 == AUTO_TIMEZONE
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::auto()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Timezone {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Timezone {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Timezone::default().as_str(), "auto");
        assert!(Timezone::default().is_auto());
    }

    #[test]
    fn test_absent_param_is_auto() {
        assert!(Timezone::from_param(None).is_auto());
    }

    #[test]
    fn test_empty_param_is_auto() {
        assert!(Timezone::from_param(Some("")).is_auto());
        assert!(Timezone::from("").is_auto());
    }

    #[test]
    fn test_named_timezone_kept() {
        let tz = Timezone::from_param(Some("Europe/Berlin"));
        assert_eq!(tz.as_str(), "Europe/Berlin");
        assert!(!tz.is_auto());
        assert_eq!(tz.to_string(), "Europe/Berlin");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let tz = Timezone::new("America/New_York");
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"America/New_York\"");
    }
}
