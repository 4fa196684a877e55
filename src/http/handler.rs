//! Resolves a parsed request against the document root.

use tokio::fs;
use tracing::debug;

use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// Maps a request to its response.
///
/// GET is served from the filesystem; PUT and DELETE are parsed but not
/// implemented, and answer 405 like any unrecognized method.
pub async fn respond(root: &str, req: &Request) -> Response {
    match req.method {
        Some(Method::GET) => serve_file(root, &req.uri).await,
        Some(_) | None => Response::method_not_allowed(),
    }
}

/// Reads the file the URI resolves to, or answers 404.
///
/// The URI is joined to the root by plain string concatenation, with no
/// separator normalization and no traversal rejection — the document root
/// is not a security boundary here.
async fn serve_file(root: &str, uri: &str) -> Response {
    let path = format!("{root}{uri}");
    debug!("Resolved path: {}", path);

    if fs::metadata(&path).await.is_err() {
        return Response::not_found();
    }

    // The file can disappear between the metadata check and the read;
    // a failed read is answered as 404 rather than crashing the worker.
    match fs::read(&path).await {
        Ok(body) => Response::ok(body),
        Err(_) => Response::not_found(),
    }
}
