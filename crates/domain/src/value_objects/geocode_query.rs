//! Free-text place search query

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Minimum number of characters in a trimmed search query
pub const MIN_QUERY_LEN: usize = 2;

/// A place name search accepted for geocoding
///
/// The text is kept as typed; trimming only decides validity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeocodeQuery(String);

impl GeocodeQuery {
    /// Validate a search query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::QueryTooShort` if fewer than two characters
    /// remain after trimming.
    pub fn new(query: impl Into<String>) -> Result<Self, DomainError> {
        let query = query.into();
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Err(DomainError::QueryTooShort);
        }
        Ok(Self(query))
    }

    /// Validate an optional query parameter
    ///
    /// # Errors
    ///
    /// Returns `DomainError::QueryTooShort` if the parameter is absent or too short.
    pub fn from_param(query: Option<&str>) -> Result<Self, DomainError> {
        query.map_or(Err(DomainError::QueryTooShort), Self::new)
    }

    /// Get the query as typed
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GeocodeQuery {
    type Error = DomainError;

    fn try_from(query: String) -> Result<Self, Self::Error> {
        Self::new(query)
    }
}

impl From<GeocodeQuery> for String {
    fn from(query: GeocodeQuery) -> Self {
        query.0
    }
}

impl fmt::Display for GeocodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
