//! Upstream errors

use thiserror::Error;

/// Failures while talking to Open-Meteo
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The call did not finish before the timer fired and was aborted
    #[error("Upstream request timed out")]
    Timeout,

    /// Upstream answered with a non-2xx status
    #[error("Upstream {0}")]
    Status(u16),

    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered 2xx with a body that is not JSON
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// A configured base URL cannot be parsed
    #[error("Invalid base URL for {api}: {reason}")]
    InvalidBaseUrl {
        /// Which API the URL belongs to
        api: &'static str,
        /// Parser message
        reason: String,
    },

    /// The HTTP client could not be constructed
    #[error("HTTP client initialization failed: {0}")]
    ClientInit(String),
}

impl UpstreamError {
    /// Whether the call was aborted by the timeout timer
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}
