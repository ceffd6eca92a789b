//! Runs one request through a caller-supplied `Transport`.
//!
//! # Design
//! The transport returns a `RawResponse` that owns the connection's body
//! reader. `execute` drains that reader into memory and then drops the raw
//! response, so the connection is released exactly once whether the read
//! succeeds or fails. There is one attempt, with no retry and no timeout.

use std::io::Read;

use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse};
use crate::request::RequestSpec;

/// A response whose body has not been read yet.
///
/// Dropping it releases the underlying connection.
#[derive(Debug)]
pub struct RawResponse<B> {
    pub status: u16,
    pub status_text: String,
    pub body: B,
}

/// Performs the network round-trip for an `HttpRequest`.
pub trait Transport {
    type Body: Read;

    /// Send `request` once. HTTP error statuses are responses, not errors.
    fn send(&self, request: &HttpRequest) -> Result<RawResponse<Self::Body>, RequestError>;
}

/// The request that was sent together with the response it produced.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub request: HttpRequest,
    pub response: HttpResponse,
}

/// Build `spec`, send it over `transport`, and read the full response.
pub fn execute<T: Transport>(spec: &RequestSpec, transport: &T) -> Result<Exchange, RequestError> {
    let request = spec.build()?;
    let raw = transport.send(&request)?;
    let response = read_response(raw)?;
    Ok(Exchange { request, response })
}

fn read_response<B: Read>(raw: RawResponse<B>) -> Result<HttpResponse, RequestError> {
    let RawResponse {
        status,
        status_text,
        mut body,
    } = raw;
    let mut bytes = Vec::new();
    body.read_to_end(&mut bytes)
        .map_err(|e| RequestError::BodyRead(e.to_string()))?;
    drop(body);
    Ok(HttpResponse {
        status,
        status_text,
        body: bytes,
    })
}
