use std::fmt;

/// HTTP request methods.
///
/// Tokens are matched case-sensitively, exactly as received. Anything that
/// is not one of the standard verbs is kept verbatim in `Other` so that the
/// router can still answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(s) => s,
        }
    }

    /// Whether this token spells `POST` in any letter case.
    ///
    /// Used by the parser to decide whether a body follows the head. Routing
    /// compares against [`Method::POST`] exactly.
    pub fn is_post_ignore_case(&self) -> bool {
        self.as_str().eq_ignore_ascii_case("POST")
    }
}

impl From<&str> for Method {
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::request::Method;
    /// assert_eq!(Method::from("GET"), Method::GET);
    /// assert_eq!(Method::from("get"), Method::Other("get".to_string()));
    /// ```
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed HTTP request.
///
/// Only the three headers the server acts on are kept; everything else on
/// the wire is discarded by the parser. A `Request` only exists when the
/// whole head parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target, always starting with `/`
    pub path: String,
    /// HTTP version token as received (not validated)
    pub version: String,
    /// `User-Agent` header value, empty when absent
    pub user_agent: String,
    /// `Host` header value, empty when absent
    pub host: String,
    /// `Content-Length` header value, 0 when absent
    pub content_length: usize,
    /// Request body; only present for POST with a non-zero `Content-Length`
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing Request objects.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    user_agent: String,
    host: String,
    content_length: usize,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the body and the matching `Content-Length`.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        self.content_length = body.len();
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let path = self.path.ok_or("path missing")?;
        if !path.starts_with('/') {
            return Err("path must start with '/'");
        }

        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            user_agent: self.user_agent,
            host: self.host,
            content_length: self.content_length,
            body: self.body,
        })
    }
}

impl Request {
    /// Request body as a slice, empty when no body was sent.
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }

    /// First path segment: the text between the leading `/` and the next `/`.
    ///
    /// ```
    /// # use minihttpd::http::request::{Method, RequestBuilder};
    /// let req = RequestBuilder::new().method(Method::GET).path("/echo/abc").build().unwrap();
    /// assert_eq!(req.first_segment(), "echo");
    /// ```
    pub fn first_segment(&self) -> &str {
        self.path
            .split('/')
            .nth(1)
            .unwrap_or_default()
    }
}
