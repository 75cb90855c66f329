//! Request routing.
//!
//! Routes are fixed and tried in order; the first match wins:
//!
//! | Path                 | Behaviour                                   |
//! |----------------------|---------------------------------------------|
//! | `/`                  | 200, greeting                               |
//! | `/echo/<rest>`       | 200, `<rest>` verbatim                      |
//! | `/user-agent`        | 200, the request's `User-Agent`             |
//! | `/files/<name>`      | file read (any method) or write (`POST`)    |
//! | anything else        | 404, `Invalid Request`                      |
//!
//! `echo` and `user-agent` are matched on the first path segment, so
//! `/echo` alone echoes an empty string and `/user-agent/x` still answers
//! with the header.

mod files;

pub use files::{FILE_CREATED, FILE_NOT_FOUND};

use crate::http::parser::ParseError;
use crate::http::request::Request;
use crate::http::response::{ContentType, Response};
use crate::store::FileStore;

pub const GREETING: &str = "Hello World!";
pub const INVALID_REQUEST: &str = "Invalid Request";

const ECHO_PREFIX: &str = "/echo/";

#[derive(Debug, Default)]
pub struct Router {
    store: Option<FileStore>,
}

impl Router {
    /// `store` is `None` when file routes are disabled.
    pub fn new(store: Option<FileStore>) -> Self {
        Self { store }
    }

    fn store(&self) -> Option<&FileStore> {
        self.store.as_ref()
    }

    /// Answer for a request that could not be parsed.
    pub fn reject(&self, error: &ParseError) -> Response {
        if error.is_bad_request() {
            tracing::warn!(error = %error, "Rejecting request");
            Response::bad_request()
        } else {
            tracing::debug!(error = %error, "Invalid request");
            invalid_request()
        }
    }

    pub async fn route(&self, req: &Request) -> Response {
        if req.path == "/" {
            return Response::ok(ContentType::Text, GREETING);
        }

        match req.first_segment() {
            "echo" => {
                let message = req.path.strip_prefix(ECHO_PREFIX).unwrap_or_default();
                Response::ok(ContentType::Text, message.to_string())
            }
            "user-agent" => Response::ok(ContentType::Text, req.user_agent.clone()),
            _ if req.path.starts_with("/files/") => files::handle(self.store(), req).await,
            _ => invalid_request(),
        }
    }
}

fn invalid_request() -> Response {
    Response::not_found(ContentType::Text, INVALID_REQUEST)
}
