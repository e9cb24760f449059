//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching exchange rates from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a non-success HTTP status.
    ///
    /// `body` carries the provider's error payload verbatim so callers can
    /// surface it to the user.
    #[error("Upstream fetch failed: {provider} returned {status}: {body}")]
    UpstreamFetch {
        /// The provider that rejected the request
        provider: String,
        /// HTTP status code returned by the provider
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (transport failure, unreadable body).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned a body that could not be interpreted as a rate series.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// The requested date range is empty (start after end).
    #[error("Invalid date range: {start} > {end}")]
    InvalidDateRange {
        /// Requested start date
        start: String,
        /// Requested end date
        end: String,
    },
}

impl MarketDataError {
    /// Returns the provider payload when this is an upstream rejection.
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            Self::UpstreamFetch { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}
