use thiserror::Error;

use crate::types::ValidationDetail;

/// Result type alias for Writesonic operations
pub type Result<T> = std::result::Result<T, WritesonicError>;

/// Errors that can occur when using the Writesonic API
#[derive(Error, Debug)]
pub enum WritesonicError {
    /// No API key could be resolved from the environment or the config file
    #[error(
        "no API key found\n\n\
         Set it with one of:\n  \
         1. writesonic auth set-key <KEY>\n  \
         2. WRITESONIC_API_KEY environment variable"
    )]
    MissingApiKey,

    /// The API rejected a request field (HTTP 422)
    #[error("{message}")]
    Validation {
        /// First reported message, used as the summary
        message: String,
        /// Every field-level entry returned by the API
        details: Vec<ValidationDetail>,
    },

    /// API returned any other non-success response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Response body did not match the shape expected for the operation
    #[error("unexpected response from API: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Unknown engine name
    #[error("unknown engine: {0} (expected one of: economy, average, good, premium)")]
    InvalidEngine(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl WritesonicError {
    /// Returns true if the request never produced an HTTP response
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Timeout(_) | Self::Connection(_)
        )
    }

    /// Returns true if the API rejected a request field
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns the HTTP status code if this error came from an API response
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(422),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
