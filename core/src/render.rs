//! Plain-text rendering of an exchange: request line, status line, body.
//!
//! Colors are applied by the caller on top of these strings.

use crate::http::HttpMethod;

pub const EMPTY_BODY: &str = "(empty body)";

/// How a response body should be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBody {
    /// The body was one JSON value, re-serialized with 2-space indentation.
    Json(String),
    /// The body was not JSON; these are the original bytes.
    Raw(Vec<u8>),
    Empty,
}

impl RenderedBody {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RenderedBody::Json(s) => s.as_bytes(),
            RenderedBody::Raw(b) => b,
            RenderedBody::Empty => EMPTY_BODY.as_bytes(),
        }
    }
}

/// Pretty-print `body` if it parses as a single JSON value.
pub fn render_body(body: &[u8]) -> RenderedBody {
    if body.is_empty() {
        return RenderedBody::Empty;
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => RenderedBody::Json(pretty),
            Err(_) => RenderedBody::Raw(body.to_vec()),
        },
        Err(_) => RenderedBody::Raw(body.to_vec()),
    }
}

pub fn request_line(method: HttpMethod, url: &str) -> String {
    format!("{method} {url}")
}

pub fn status_line(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("Status: {status}")
    } else {
        format!("Status: {status} {status_text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_prints_object_with_two_spaces() {
        let rendered = render_body(br#"{"a":1}"#);
        assert_eq!(rendered, RenderedBody::Json("{\n  \"a\": 1\n}".to_string()));
    }

    #[test]
    fn keeps_key_order() {
        let rendered = render_body(br#"{"z":1,"a":2,"m":3}"#);
        assert_eq!(
            rendered,
            RenderedBody::Json("{\n  \"z\": 1,\n  \"a\": 2,\n  \"m\": 3\n}".to_string())
        );
    }

    #[test]
    fn keeps_number_literals() {
        let rendered = render_body(b"[1.50, 12345678901234567890123]");
        assert_eq!(
            rendered,
            RenderedBody::Json("[\n  1.50,\n  12345678901234567890123\n]".to_string())
        );
    }

    #[test]
    fn scalar_json_is_json() {
        assert_eq!(render_body(b" true "), RenderedBody::Json("true".to_string()));
    }

    #[test]
    fn non_json_is_passed_through() {
        let body = b"<html>hi</html>\n";
        assert_eq!(render_body(body), RenderedBody::Raw(body.to_vec()));
    }

    #[test]
    fn trailing_garbage_is_not_json() {
        let body = br#"{"a":1} extra"#;
        assert_eq!(render_body(body), RenderedBody::Raw(body.to_vec()));
    }

    #[test]
    fn invalid_utf8_is_passed_through() {
        let body = [0xff, 0xfe, 0x00, 0x41];
        assert_eq!(render_body(&body), RenderedBody::Raw(body.to_vec()));
    }

    #[test]
    fn empty_body_renders_placeholder() {
        let rendered = render_body(b"");
        assert_eq!(rendered, RenderedBody::Empty);
        assert_eq!(rendered.as_bytes(), b"(empty body)");
    }

    #[test]
    fn status_line_formats() {
        assert_eq!(status_line(200, "OK"), "Status: 200 OK");
        assert_eq!(status_line(599, ""), "Status: 599");
    }

    #[test]
    fn request_line_formats() {
        assert_eq!(
            request_line(HttpMethod::Post, "http://localhost/x"),
            "POST http://localhost/x"
        );
    }
}
