//! Error types and result handling.
//!
//! All fallible operations return [`Result<T>`], an alias over [`enum@Error`].
//! The variants mirror the failure classes the client can actually hit:
//! a rejected login, a transport failure, a JSON decoding failure, or a
//! response whose shape doesn't match the wire contract.

use thiserror::Error;

/// Type alias for Results with client errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The token handshake was rejected (non-200 response, or a token
    /// response without an `access_token` field).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Transport-level errors from the HTTP client: connection failures,
    /// timeouts, and non-success status codes.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected entity.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded as JSON but its shape violates the wire
    /// contract, e.g. a missing top-level `response` array.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl Error {
    /// Creates an authentication error with the given message.
    pub fn auth(msg: impl Into<String>) -> Self {
        Error::Auth(msg.into())
    }

    /// Creates a malformed-response error with the given message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed(msg.into())
    }
}
