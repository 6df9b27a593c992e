use std::borrow::Cow;

use bytes::Bytes;

/// A complete HTTP response, produced by a route handler and consumed by the
/// writer. Single-owner by construction: the handler builds it, the
/// connection hands it to the writer, and it is dropped once the bytes are
/// on the wire.
#[derive(Debug, Clone)]
pub struct Response {
    /// Numeric status code. Codes outside the reason-phrase table are still
    /// written correctly, with "Unknown" as the phrase.
    pub status: u16,
    /// Content-Type header value. Static for the common cases, owned when a
    /// handler computes one.
    pub content_type: Cow<'static, str>,
    /// Body bytes; empty means no body, and Content-Length is always
    /// `body.len()`.
    pub body: Bytes,
    /// Optional Set-Cookie header value, written as its own header line.
    pub set_cookie: Option<String>,
}

impl Response {
    pub fn new(
        status: u16,
        content_type: impl Into<Cow<'static, str>>,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
            set_cookie: None,
        }
    }

    /// Plain-text response with the given status.
    pub fn text(status: u16, body: impl Into<Bytes>) -> Self {
        Self::new(status, "text/plain", body)
    }

    /// 200 HTML page.
    pub fn html(body: impl Into<Bytes>) -> Self {
        Self::new(200, "text/html; charset=utf-8", body)
    }

    pub fn not_found() -> Self {
        Self::text(404, "404 Not Found")
    }

    pub fn bad_request() -> Self {
        Self::text(400, "400 Bad Request")
    }

    pub fn set_cookie(mut self, value: impl Into<String>) -> Self {
        self.set_cookie = Some(value.into());
        self
    }
}

/// Reason phrase for the status codes the application actually emits.
/// Anything else serializes with the numeric code and "Unknown".
pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
