use thiserror::Error;

use crate::http::request::{Method, Request};

/// Upper bound on the request line plus headers.
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

/// Largest `Content-Length` accepted for a body that will be buffered.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request line")]
    InvalidRequestLine,
    #[error("stream ended before a request line was received")]
    EndOfStream,
    #[error("request head is not valid UTF-8")]
    InvalidEncoding,
    #[error("invalid Content-Length value {0:?}")]
    InvalidContentLength(String),
    #[error("request head exceeds {MAX_HEAD_BYTES} bytes")]
    HeadTooLarge,
    #[error("declared body of {0} bytes exceeds {MAX_BODY_BYTES} bytes")]
    BodyTooLarge(usize),
    #[error("incomplete request")]
    Incomplete,
}

impl ParseError {
    /// Errors the client is told about with `400 Bad Request`. The rest are
    /// answered as an unmatched request.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ParseError::InvalidContentLength(_)
                | ParseError::HeadTooLarge
                | ParseError::BodyTooLarge(_)
        )
    }
}

/// Parses one request out of `buf`.
///
/// Returns `ParseError::Incomplete` while the head (or a POST body) has not
/// fully arrived; the caller reads more and tries again. On success the
/// number of consumed bytes is returned alongside the request.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    parse(buf, false)
}

/// Parses whatever arrived before the peer closed its side of the stream.
///
/// A missing blank line ends the headers, an unterminated last line still
/// counts, and a short POST body is kept as-is (or dropped when empty).
pub fn parse_partial_request(buf: &[u8]) -> Result<Request, ParseError> {
    parse(buf, true).map(|(request, _)| request)
}

fn parse(buf: &[u8], at_eof: bool) -> Result<(Request, usize), ParseError> {
    let mut cursor = 0;

    // Request line
    let line = next_line(buf, &mut cursor, at_eof)?.ok_or(ParseError::EndOfStream)?;
    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;

    // Trailing spaces are dropped, interior empty tokens are not
    let parts: Vec<&str> = line.trim_end_matches(' ').split(' ').collect();
    let [method, path, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequestLine);
    };
    if parts.iter().any(|p| p.is_empty()) || !path.starts_with('/') {
        return Err(ParseError::InvalidRequestLine);
    }

    let method = Method::from(*method);
    let path = path.to_string();
    let version = version.to_string();

    // Headers
    let mut user_agent = String::new();
    let mut host = String::new();
    let mut content_length = 0usize;

    while let Some(line) = next_line(buf, &mut cursor, at_eof)? {
        if line.is_empty() {
            break;
        }
        let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;

        if let Some(value) = header_value(line, "user-agent:") {
            user_agent = value.to_string();
        } else if let Some(value) = header_value(line, "host:") {
            host = value.to_string();
        } else if let Some(value) = header_value(line, "content-length:") {
            content_length = value
                .parse()
                .map_err(|_| ParseError::InvalidContentLength(value.to_string()))?;
        }
    }

    // Body
    let mut body = None;
    if method.is_post_ignore_case() && content_length > 0 {
        if content_length > MAX_BODY_BYTES {
            return Err(ParseError::BodyTooLarge(content_length));
        }

        let available = &buf[cursor..];

        if available.len() >= content_length {
            body = Some(available[..content_length].to_vec());
            cursor += content_length;
        } else if at_eof {
            if !available.is_empty() {
                body = Some(available.to_vec());
            }
            cursor = buf.len();
        } else {
            return Err(ParseError::Incomplete);
        }
    }

    let request = Request {
        method,
        path,
        version,
        user_agent,
        host,
        content_length,
        body,
    };

    Ok((request, cursor))
}

/// Yields the next line (without its `\n` or `\r\n`) and advances `cursor`.
///
/// `Ok(None)` means the stream ended with nothing left to read.
fn next_line<'a>(
    buf: &'a [u8],
    cursor: &mut usize,
    at_eof: bool,
) -> Result<Option<&'a [u8]>, ParseError> {
    let rest = &buf[*cursor..];

    if let Some(pos) = rest.iter().position(|&b| b == b'\n') {
        *cursor += pos + 1;
        return Ok(Some(strip_cr(&rest[..pos])));
    }

    if !at_eof {
        if buf.len() > MAX_HEAD_BYTES {
            return Err(ParseError::HeadTooLarge);
        }
        return Err(ParseError::Incomplete);
    }

    if rest.is_empty() {
        return Ok(None);
    }

    *cursor = buf.len();
    Ok(Some(strip_cr(rest)))
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Case-insensitive prefix match on `name:`; returns the trimmed value.
fn header_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let prefix = line.get(..name.len())?;
    if prefix.eq_ignore_ascii_case(name) {
        Some(line[name.len()..].trim())
    } else {
        None
    }
}
