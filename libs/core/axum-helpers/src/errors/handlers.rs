use axum::{
    http::{Method, StatusCode, Uri},
    response::Response,
};

use super::{ErrorCode, error_response};

/// Router fallback: `404 Route not found: GET /nope`
pub async fn not_found(method: Method, uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("Route not found: {} {}", method, uri.path()),
        ErrorCode::NotFound,
    )
}

/// Fallback for a known path with an unsupported verb
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {} not allowed on {}", method, uri.path()),
        ErrorCode::MethodNotAllowed,
    )
}
