//! Error types for the users API client.
//!
//! # Design
//! Remote failures are bucketed the way the coordinator needs to act on
//! them: `NotFound` for a missing resource, `Validation` for the server
//! rejecting a payload (other 4xx), `Server` for everything the client
//! cannot do anything about, `Network` when no response arrived at all.
//! `Serialization`/`Deserialization` cover local JSON failures on either
//! side of the wire.

use thiserror::Error;

/// A transport-level failure: the request never produced a response.
#[derive(Debug, Clone, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Errors returned by `UserClient` parse methods and coordinator calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained (connection refused, DNS, broken stream).
    #[error("network error: {0}")]
    Network(String),

    /// The server returned 404 — the requested user does not exist.
    #[error("user not found")]
    NotFound,

    /// The server rejected the payload with a 4xx other than 404.
    #[error("server rejected request: HTTP {status}: {body}")]
    Validation { status: u16, body: String },

    /// The server returned a non-success status outside the 4xx range.
    #[error("server error: HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}
