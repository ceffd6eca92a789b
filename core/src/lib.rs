//! Request construction and response rendering for the `req` HTTP client.
//!
//! # Overview
//! Builds an `HttpRequest` from a `RequestSpec` and renders an
//! `HttpResponse` without touching the network (host-does-IO pattern). The
//! caller supplies a `Transport` that performs the single round-trip, which
//! keeps every step here deterministic and testable.
//!
//! # Design
//! - `RequestSpec` is what the user typed; `HttpRequest` is what gets sent.
//! - Malformed headers and bad URLs are rejected before the transport runs.
//! - `execute` owns the response body reader and drops it on every path.
//! - Rendering produces plain strings; coloring is left to the caller.

pub mod error;
pub mod executor;
pub mod header;
pub mod http;
pub mod render;
pub mod request;

pub use error::RequestError;
pub use executor::{execute, Exchange, RawResponse, Transport};
pub use header::{parse_headers, ParsedHeader};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{render_body, request_line, status_line, RenderedBody};
pub use request::RequestSpec;
