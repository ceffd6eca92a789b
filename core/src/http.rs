//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the outgoing request and the captured response as
//! plain data. The core builds `HttpRequest` values and renders
//! `HttpResponse` values without touching the network; a `Transport`
//! implementation supplied by the caller does the actual I/O.

use std::fmt;
use std::str::FromStr;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("get") {
            Ok(HttpMethod::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(HttpMethod::Post)
        } else {
            Err(format!("unsupported method: {s}"))
        }
    }
}

/// A fully resolved HTTP request described as plain data.
///
/// `url` is what the user typed and is only displayed; `target` is the
/// percent-encoded form that goes on the wire. Header names are unique under
/// ASCII case-insensitive comparison; see [`HttpRequest::set_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            method,
            target: url.clone(),
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set a header by name, replacing any existing value.
    ///
    /// An existing entry keeps its position but takes the new spelling of
    /// the name.
    pub fn set_header(&mut self, key: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some(entry) => *entry = (key.to_string(), value.to_string()),
            None => self.headers.push((key.to_string(), value.to_string())),
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response captured in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
