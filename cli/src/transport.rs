//! Blocking `Transport` backed by a ureq agent.
//!
//! Non-2xx statuses come back as responses (`http_status_as_error(false)`)
//! so the caller prints them like any other exchange.

use req_core::{HttpMethod, HttpRequest, RawResponse, RequestError, Transport};
use tracing::{debug, trace};
use ureq::{Agent, BodyReader, RequestBuilder};

#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    type Body = BodyReader<'static>;

    fn send(&self, request: &HttpRequest) -> Result<RawResponse<Self::Body>, RequestError> {
        debug!(method = %request.method, target = %request.target, "sending request");
        for (key, value) in &request.headers {
            trace!(%key, %value, "request header");
        }

        let body = request.body.as_deref().map(str::as_bytes);
        let result = match request.method {
            HttpMethod::Get => {
                let builder = with_headers(self.agent.get(&request.target), request);
                match body {
                    Some(bytes) => builder.force_send_body().send(bytes),
                    None => builder.call(),
                }
            }
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&request.target), request);
                match body {
                    Some(bytes) => builder.send(bytes),
                    None => builder.send_empty(),
                }
            }
        };
        let response = result.map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: response.into_body().into_reader(),
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, request: &HttpRequest) -> RequestBuilder<B> {
    for (key, value) in &request.headers {
        builder = builder.header(key, value);
    }
    builder
}
