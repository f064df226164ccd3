use crate::http::request::{Method, ParsedRequest};

/// Anchor preceding the request target.
const TARGET_START: &str = " /";
/// Anchor following the request target. The byte just before it, normally
/// a space, is not part of the target.
const TARGET_END: &str = "HTTP";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty request line")]
    EmptyRequest,
    #[error("request line has no method")]
    MissingMethod,
    #[error("invalid method {0:?}")]
    InvalidMethod(String),
    #[error("request line has no target")]
    MissingTarget,
}

/// Parses raw request bytes into a [`ParsedRequest`].
///
/// Only the request line is inspected. The method is whatever precedes the
/// first `/`, and the target is the text between the first `" /"` and the
/// next `"HTTP"`, less the byte in front of it. Bytes that are not valid UTF-8 are replaced rather
/// than rejected.
pub fn parse_request(buf: &[u8]) -> Result<ParsedRequest, ParseError> {
    let text = String::from_utf8_lossy(buf);
    let request_line = text.split('\n').next().unwrap_or_default();

    if request_line.trim().is_empty() {
        return Err(ParseError::EmptyRequest);
    }

    let method = parse_method(request_line)?;
    let path = parse_target(request_line)?;

    Ok(ParsedRequest::new(method, path))
}

fn parse_method(request_line: &str) -> Result<Method, ParseError> {
    let (token, _) = request_line
        .split_once('/')
        .ok_or(ParseError::MissingMethod)?;
    let token = token.trim_end();

    Method::from_token(token).ok_or_else(|| ParseError::InvalidMethod(token.to_string()))
}

fn parse_target(request_line: &str) -> Result<&str, ParseError> {
    let start = request_line
        .find(TARGET_START)
        .ok_or(ParseError::MissingTarget)?
        + TARGET_START.len();

    let end = request_line[start..]
        .find(TARGET_END)
        .ok_or(ParseError::MissingTarget)?;
    let end = start + end.saturating_sub(1);

    request_line
        .get(start..end)
        .ok_or(ParseError::MissingTarget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mime::ContentKind;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(req).unwrap();

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.path, "index.html");
        assert_eq!(parsed.content_kind, ContentKind::Html);
    }

    #[test]
    fn target_for_root_is_empty() {
        let parsed = parse_request(b"GET / HTTP/1.1\n").unwrap();
        assert_eq!(parsed.path, "");
    }

    #[test]
    fn target_ends_at_first_http() {
        let parsed = parse_request(b"GET /HTTPdocs/a.json HTTP/1.1\n").unwrap();
        assert_eq!(parsed.path, "");
        assert_eq!(parsed.content_kind, ContentKind::Text);

        let parsed = parse_request(b"GET /a?HTTP HTTP/1.1\n").unwrap();
        assert_eq!(parsed.path, "a");
    }

    #[test]
    fn byte_before_http_is_dropped_even_without_space() {
        let parsed = parse_request(b"GET /index.htmlHTTP/1.1\n").unwrap();
        assert_eq!(parsed.path, "index.htm");
        assert_eq!(parsed.content_kind, ContentKind::Text);
    }

    #[test]
    fn missing_version_is_rejected() {
        assert_eq!(
            parse_request(b"GET /index.html\n"),
            Err(ParseError::MissingTarget)
        );
    }
}
