//! Parsing of raw `"Key: Value"` header arguments.

use crate::error::RequestError;

/// A header split out of a raw `"Key: Value"` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub key: String,
    pub value: String,
}

impl ParsedHeader {
    /// Split `raw` on its first colon and trim both sides.
    ///
    /// Fails when there is no colon or the trimmed key is not an HTTP token.
    pub fn parse(raw: &str) -> Result<Self, RequestError> {
        let malformed = || RequestError::MalformedHeaders(vec![raw.to_string()]);
        let (key, value) = raw.split_once(':').ok_or_else(malformed)?;
        let key = key.trim();
        if !is_token(key) {
            return Err(malformed());
        }
        Ok(Self {
            key: key.to_string(),
            value: value.trim().to_string(),
        })
    }
}

/// RFC 9110 `token`: one or more visible ASCII characters, no separators.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
        })
}

/// Parse every raw header, reporting all malformed entries at once.
pub fn parse_headers<S: AsRef<str>>(raws: &[S]) -> Result<Vec<ParsedHeader>, RequestError> {
    let mut parsed = Vec::with_capacity(raws.len());
    let mut malformed = Vec::new();
    for raw in raws {
        match ParsedHeader::parse(raw.as_ref()) {
            Ok(header) => parsed.push(header),
            Err(_) => malformed.push(raw.as_ref().to_string()),
        }
    }
    if malformed.is_empty() {
        Ok(parsed)
    } else {
        Err(RequestError::MalformedHeaders(malformed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        let h = ParsedHeader::parse("Authorization: Bearer x").unwrap();
        assert_eq!(h.key, "Authorization");
        assert_eq!(h.value, "Bearer x");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let h = ParsedHeader::parse("X-Time:  10:30:00 ").unwrap();
        assert_eq!(h.key, "X-Time");
        assert_eq!(h.value, "10:30:00");
    }

    #[test]
    fn empty_value_is_allowed() {
        let h = ParsedHeader::parse("X-Empty:").unwrap();
        assert_eq!(h.key, "X-Empty");
        assert_eq!(h.value, "");
    }

    #[test]
    fn missing_colon_is_malformed() {
        let err = ParsedHeader::parse("Authorization Bearer x").unwrap_err();
        assert!(matches!(err, RequestError::MalformedHeaders(ref v) if v == &["Authorization Bearer x"]));
    }

    #[test]
    fn empty_key_is_malformed() {
        assert!(ParsedHeader::parse("  : value").is_err());
    }

    #[test]
    fn key_with_space_or_separator_is_malformed() {
        assert!(ParsedHeader::parse("Bad Key: x").is_err());
        assert!(ParsedHeader::parse("X(Y): 1").is_err());
        assert!(ParsedHeader::parse("X-Ü: 1").is_err());
    }

    #[test]
    fn key_with_token_punctuation_is_accepted() {
        let h = ParsedHeader::parse("X-Custom_Header.v2~!: ok").unwrap();
        assert_eq!(h.key, "X-Custom_Header.v2~!");
    }

    #[test]
    fn parse_headers_collects_all_malformed_in_order() {
        let err = parse_headers(&["A: 1", "bad", "B: 2", "worse"]).unwrap_err();
        match err {
            RequestError::MalformedHeaders(raws) => assert_eq!(raws, vec!["bad", "worse"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_headers_keeps_order() {
        let headers = parse_headers(&["B: 2", "A: 1"]).unwrap();
        let keys: Vec<&str> = headers.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }
}
