use bytes::Bytes;

/// A parsed HTTP request.
///
/// Every field is owned by the request itself; nothing aliases the read
/// buffer, so a request can be passed around freely for the lifetime of its
/// connection. Only the headers the application layer actually consumes are
/// kept (`Content-Type` and `Cookie`); everything else is dropped at parse
/// time.
#[derive(Debug, Clone)]
pub struct Request {
    /// Method token exactly as sent, e.g. "GET" or "POST".
    pub method: String,
    /// Request path with the query string already stripped.
    pub path: String,
    /// Raw query string without the leading `?`, if the target had one.
    pub query: Option<String>,
    /// Request body bytes. Empty for bodyless requests.
    pub body: Bytes,
    /// Value of the Content-Type header, if present.
    pub content_type: Option<String>,
    /// Raw value of the Cookie header, if present.
    pub cookies: Option<String>,
}

impl Request {
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Builder for constructing requests directly, used by handler tests and
/// anything that needs a request without going through the parser.
pub struct RequestBuilder {
    method: String,
    path: String,
    query: Option<String>,
    body: Bytes,
    content_type: Option<String>,
    cookies: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: None,
            body: Bytes::new(),
            content_type: None,
            cookies: None,
        }
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    pub fn cookies(mut self, value: impl Into<String>) -> Self {
        self.cookies = Some(value.into());
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
            content_type: self.content_type,
            cookies: self.cookies,
        }
    }
}
