use bytes::Bytes;
use thiserror::Error;

use crate::http::request::Request;

/// Upper bound on one request, request line + headers + body. The connection
/// handler reads at most this many bytes; anything the first read does not
/// capture is never seen.
pub const MAX_REQUEST_BYTES: usize = 8192;

/// Every parse failure collapses into this one error. A missing CRLF, a
/// request line without a target and a truncated header block all look the
/// same to the caller, which answers each with a 400 and closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed HTTP request")]
pub struct MalformedRequest;

/// Parses one HTTP/1.1 request out of a single read's worth of bytes.
///
/// The header block must be complete (terminated by an empty line). All
/// bytes after the empty line are taken as the body verbatim; Content-Length
/// is not consulted, so a body that did not arrive in the same read as the
/// headers is silently short. Header names are matched case-insensitively.
pub fn parse_request(buf: &[u8]) -> Result<Request, MalformedRequest> {
    let headers_end = find_headers_end(buf).ok_or(MalformedRequest)?;
    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| MalformedRequest)?;
    let body = &buf[headers_end + 4..];

    let mut lines = head.split("\r\n");

    let request_line = lines.next().ok_or(MalformedRequest)?;
    let (method, rest) = request_line.split_once(' ').ok_or(MalformedRequest)?;
    let (target, _version) = rest.split_once(' ').ok_or(MalformedRequest)?;
    if method.is_empty() || target.is_empty() {
        return Err(MalformedRequest);
    }

    // Path and query separate on the first '?'; the '?' itself is dropped.
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (target.to_string(), None),
    };

    let mut content_type = None;
    let mut cookies = None;

    for line in lines {
        if line.is_empty() {
            continue;
        }
        // Lines without a colon are skipped rather than rejected; only the
        // request line and the blank-line boundary are load-bearing here.
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.eq_ignore_ascii_case("Content-Type") {
            content_type = Some(value.trim().to_string());
        } else if name.eq_ignore_ascii_case("Cookie") {
            cookies = Some(value.trim().to_string());
        }
    }

    Ok(Request {
        method: method.to_string(),
        path,
        query,
        body: Bytes::copy_from_slice(body),
        content_type,
        cookies,
    })
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
