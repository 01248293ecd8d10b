//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data: the core builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network.
//! Executing the round-trip is the job of a [`Transport`] implementation
//! supplied by the embedding program — a real HTTP agent in the CLI, a
//! scripted fake in tests. All fields use owned types so values can move
//! freely between the coordinator and the transport.

use async_trait::async_trait;

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `UserClient::build_*` methods and handed to a [`Transport`]
/// for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`] and passed to `UserClient::parse_*`
/// methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes an [`HttpRequest`] and yields the resulting [`HttpResponse`].
///
/// A transport error means no response was obtained at all (connection
/// refused, DNS failure, broken stream); non-success HTTP statuses are
/// data, not errors, and must be returned in the response so the client
/// can map them. Implementations apply no retries and no client-side
/// timeout beyond their own transport defaults.
#[async_trait]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
