//! Error types for the request pipeline.
//!
//! # Design
//! Every variant is fatal to the single invocation. `MalformedHeaders` keeps
//! each offending raw string so the caller can report them one per line
//! before anything is sent.

use std::fmt;

/// Errors returned while building, sending, or reading a request.
#[derive(Debug)]
pub enum RequestError {
    /// The URL could not be parsed or uses a scheme other than http/https.
    InvalidUrl { url: String, reason: String },

    /// One or more `--header` values had no colon or an empty key.
    MalformedHeaders(Vec<String>),

    /// The request never produced a response (DNS, refused connection, TLS).
    Transport(String),

    /// The response arrived but its body could not be read to the end.
    BodyRead(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidUrl { url, reason } => {
                write!(f, "invalid URL {url:?}: {reason}")
            }
            RequestError::MalformedHeaders(raws) => {
                let joined = raws.join(", ");
                write!(f, "invalid header format: {joined} (use 'Key: Value')")
            }
            RequestError::Transport(msg) => write!(f, "request failed: {msg}"),
            RequestError::BodyRead(msg) => {
                write!(f, "failed to read response: {msg}")
            }
        }
    }
}

impl std::error::Error for RequestError {}
