use crate::http::request::{Method, Request};
use crate::http::response::{ContentType, Response};
use crate::store::{FileStore, StoreError};

pub const FILE_CREATED: &str = "File Created";
pub const FILE_NOT_FOUND: &str = "File Not Found";

pub(super) async fn handle(store: Option<&FileStore>, req: &Request) -> Response {
    let name = file_name(&req.path);

    if req.method == Method::POST {
        create(store, name, req.body_bytes()).await
    } else {
        fetch(store, name).await
    }
}

/// Everything after the last `/`.
fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

async fn create(store: Option<&FileStore>, name: &str, contents: &[u8]) -> Response {
    let Some(store) = store else {
        return Response::not_found(ContentType::Text, FILE_NOT_FOUND);
    };

    match store.write(name, contents).await {
        Ok(()) => {
            tracing::info!(file = name, bytes = contents.len(), "File created");
            Response::created(ContentType::Text, FILE_CREATED)
        }
        Err(e) => {
            // Write failures are reported as 404, there is no 5xx for writes
            tracing::warn!(file = name, error = %e, "Could not write file");
            Response::not_found(ContentType::Text, FILE_NOT_FOUND)
        }
    }
}

async fn fetch(store: Option<&FileStore>, name: &str) -> Response {
    let Some(store) = store else {
        return Response::not_found(ContentType::OctetStream, FILE_NOT_FOUND);
    };

    match store.read(name).await {
        Ok(contents) => Response::ok(ContentType::OctetStream, contents),
        Err(StoreError::NotFound(_) | StoreError::InvalidName(_)) => {
            Response::not_found(ContentType::OctetStream, FILE_NOT_FOUND)
        }
        Err(e) => {
            tracing::warn!(file = name, error = %e, "Could not read file");
            Response::internal_error()
        }
    }
}
