//! Error taxonomy for the NHL API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NhlApiError>;

/// Errors that can occur when talking to the NHL API.
///
/// Every pipeline stage maps its failures into exactly one of these kinds;
/// nothing is swallowed or replaced with a default value. The client performs
/// no retries of its own — callers that want retry policy layer it on top.
#[derive(Debug, Error)]
pub enum NhlApiError {
    /// The requested resource was not found (HTTP 404).
    #[error("resource not found: {message}")]
    NotFound {
        /// Diagnostic message including the resource path.
        message: String,
    },

    /// Rate limit exceeded (HTTP 429).
    #[error("rate limit exceeded")]
    RateLimited,

    /// Server error (HTTP 5xx).
    #[error("server error ({status}): {message}")]
    Server {
        /// The HTTP status code (500-599).
        status: u16,
        /// Diagnostic message including the resource path.
        message: String,
    },

    /// Bad request (HTTP 400).
    #[error("bad request: {message}")]
    BadRequest {
        /// Diagnostic message including the resource path.
        message: String,
    },

    /// Unauthorized request (HTTP 401/403).
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Diagnostic message including the resource path.
        message: String,
    },

    /// The API returned an unexpected non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// Diagnostic message including the resource path.
        message: String,
    },

    /// The HTTP request itself failed (connection refused, timeout, DNS,
    /// TLS). Distinct from the status-based kinds above: the exchange never
    /// produced a usable response.
    #[error("request failed: {source}")]
    Request {
        /// The underlying transport error.
        #[from]
        source: reqwest::Error,
    },

    /// The response body could not be decoded into the requested type.
    /// Indicates a contract violation between client and server rather than
    /// a connectivity problem.
    #[error("JSON decoding failed: {source}")]
    Json {
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Any other error (URL construction, invalid arguments).
    #[error("{message}")]
    Other {
        /// Human-readable description.
        message: String,
    },
}

impl NhlApiError {
    /// Maps a non-2xx HTTP status to an error kind, embedding the resource
    /// path for diagnosability.
    pub(crate) fn from_status(status: StatusCode, resource: &str) -> Self {
        let message = format!("request to {resource} failed");

        match status.as_u16() {
            400 => Self::BadRequest { message },
            401 | 403 => Self::Unauthorized { message },
            404 => Self::NotFound { message },
            429 => Self::RateLimited,
            code @ 500..=599 => Self::Server {
                status: code,
                message,
            },
            code => Self::Api {
                status: code,
                message: format!("unexpected error: {message}"),
            },
        }
    }
}
