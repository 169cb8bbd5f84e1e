//! Fetch and decode error types.

use thiserror::Error;

/// Errors that make a zones fetch fail. Callers treat any of these as
/// "no data" and surface a load-failure state.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The zones endpoint returned a non-success status code (429 included;
    /// nothing is retried).
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// The configured base address is not a usable URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// The response body is not the expected `{ "zones": [...] }` shape.
///
/// Never surfaced to users: [`crate::ZoneClient::fetch_all`] degrades it to
/// an empty zone list.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Body is JSON but not an object.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// The object has no `zones` array.
    #[error("payload has no 'zones' array")]
    MissingZones,
}
