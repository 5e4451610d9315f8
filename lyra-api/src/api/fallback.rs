//! JSON responses for requests that never reach a handler
//!
//! Unknown paths, wrong methods and handler panics all answer with the same
//! `{msg, status}` payload as handler errors.

use std::any::Any;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use lyra_common::api::messages;

use crate::error::{json_error, ApiError};

/// Fallback for unknown paths
pub async fn endpoint_not_found() -> Response {
    ApiError::EndpointNotFound.into_response()
}

/// Replace the empty 405 produced by method routing with a JSON payload
///
/// The `Allow` header is preserved.
pub async fn method_not_allowed_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let mut json = json_error(StatusCode::METHOD_NOT_ALLOWED, messages::METHOD_NOT_ALLOWED);
    if let Some(allow) = response.headers().get(header::ALLOW) {
        json.headers_mut().insert(header::ALLOW, allow.clone());
    }
    json
}

/// Convert a handler panic into the generic 500 payload
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
