//! Domain-level errors

use thiserror::Error;

/// Errors raised while turning raw input into request value objects
///
/// The display strings are returned verbatim to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Latitude or longitude missing, unparseable, non-finite or out of range
    #[error("lat/lon required")]
    MissingCoordinates,

    /// Geocoding query absent or shorter than two characters after trimming
    #[error("Missing or too short query")]
    QueryTooShort,
}
