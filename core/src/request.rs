//! Turns a `RequestSpec` into a resolved `HttpRequest`.
//!
//! # Design
//! `RequestSpec` holds exactly what the user typed: method, URL, optional
//! body and raw header strings. `build` validates all of it and produces an
//! `HttpRequest` without touching the network, so construction errors are
//! always reported before anything is sent.

use url::Url;

use crate::error::RequestError;
use crate::header::parse_headers;
use crate::http::{HttpMethod, HttpRequest};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// The single outgoing request of one invocation, as supplied on the command
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
    pub headers: Vec<String>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, raw: impl Into<String>) -> Self {
        self.headers.push(raw.into());
        self
    }

    /// Validate the URL and headers and resolve them into an `HttpRequest`.
    ///
    /// A non-empty body sets `Content-Type: application/json`; explicit
    /// headers are applied afterwards and win over that default.
    pub fn build(&self) -> Result<HttpRequest, RequestError> {
        let target = validate_url(&self.url)?;
        let headers = parse_headers(&self.headers)?;

        let mut request = HttpRequest::new(self.method, self.url.as_str());
        request.target = target.into();
        if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
            request.body = Some(body.to_string());
            request.set_header(CONTENT_TYPE, APPLICATION_JSON);
        }
        for header in &headers {
            request.set_header(&header.key, &header.value);
        }
        Ok(request)
    }
}

/// Parse `raw` into its percent-encoded form.
fn validate_url(raw: &str) -> Result<Url, RequestError> {
    let invalid = |reason: String| RequestError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}
