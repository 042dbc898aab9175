//! Error types for the todo API client.
//!
//! 404 and 400 get dedicated variants carrying the server's `errorMessage`,
//! since callers branch on "no such todo" and "rejected input". Every other
//! unexpected status lands in `HttpError` with the raw body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The server returned 400: the input failed validation.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Any other non-success status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
