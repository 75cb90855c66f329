use bytes::Bytes;

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `BadRequest` (400): Unusable request head (bad `Content-Length`, oversized head)
/// - `NotFound` (404): Unmatched route, missing file, or failed write
/// - `InternalServerError` (500): A listed file could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// The two body types the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `text/plain`
    Text,
    /// `application/octet-stream`
    OctetStream,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text/plain",
            ContentType::OctetStream => "application/octet-stream",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// There is no separate length field: `Content-Length` is always the byte
/// length of `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the `Content-Type` header
    pub content_type: ContentType,
    /// Response body as bytes
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use minihttpd::http::response::{ContentType, ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type(ContentType::OctetStream)
///     .body(b"\x00\x01".to_vec())
///     .build();
/// assert_eq!(response.content_length(), 2);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: ContentType,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new builder; content type defaults to `text/plain`.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: ContentType::Text,
            body: Bytes::new(),
        }
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK with the given content type and body.
    pub fn ok(content_type: ContentType, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .body(body)
            .build()
    }

    /// 201 Created with the given content type and body.
    pub fn created(content_type: ContentType, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Created)
            .content_type(content_type)
            .body(body)
            .build()
    }

    /// 404 Not Found with the given content type and body.
    pub fn not_found(content_type: ContentType, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .content_type(content_type)
            .body(body)
            .build()
    }

    /// 400 Bad Request, text/plain.
    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest)
            .body("Bad Request")
            .build()
    }

    /// 500 Internal Server Error, text/plain.
    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError)
            .body("Internal Server Error")
            .build()
    }

    /// Byte length of the body, sent as `Content-Length`.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
