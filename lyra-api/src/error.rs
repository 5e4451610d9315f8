//! Error types for lyra-api
//!
//! Every handler returns [`ApiResult`]. Conversion to an HTTP response is the
//! single boundary where internal failures collapse to the client-facing
//! `{msg, status}` payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lyra_common::api::{messages, ErrorBody};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request parameters failed validation (400)
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// No route matches the request path, including ids that are not integers (404)
    #[error("Endpoint not found")]
    EndpointNotFound,

    /// Upstream has no such artist, or no search hits (404)
    #[error("Artist not found")]
    ArtistNotFound,

    /// Upstream has no such song or lyrics page (404)
    #[error("Song not found")]
    SongNotFound,

    /// Upstream answered with a non-OK status, timed out or was unreachable (503)
    #[error("Upstream unavailable: {0}")]
    ServiceUnavailable(String),

    /// Upstream answered OK but the payload was not the expected shape (500)
    #[error("Malformed upstream payload: {0}")]
    MalformedUpstream(String),

    /// Fault inside this service (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameters(_) => StatusCode::BAD_REQUEST,
            ApiError::EndpointNotFound | ApiError::ArtistNotFound | ApiError::SongNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::MalformedUpstream(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message; internal detail is never exposed
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidParameters(_) => messages::INVALID_PARAMETERS,
            ApiError::EndpointNotFound => messages::ENDPOINT_NOT_FOUND,
            ApiError::ArtistNotFound => messages::ARTIST_NOT_FOUND,
            ApiError::SongNotFound => messages::SONG_NOT_FOUND,
            ApiError::ServiceUnavailable(_) => messages::SERVICE_UNAVAILABLE,
            ApiError::MalformedUpstream(_) | ApiError::Internal(_) => {
                messages::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidParameters(detail) => {
                tracing::debug!(detail = %detail, "Rejected request parameters")
            }
            ApiError::EndpointNotFound | ApiError::ArtistNotFound | ApiError::SongNotFound => {
                tracing::debug!("{}", self)
            }
            ApiError::ServiceUnavailable(detail) => {
                tracing::warn!(detail = %detail, "Upstream unavailable")
            }
            ApiError::MalformedUpstream(detail) => {
                tracing::error!(detail = %detail, "Upstream returned an unexpected payload")
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error while handling request")
            }
        }

        json_error(self.status_code(), self.message())
    }
}

/// Render an error payload whose `status` field matches the HTTP status
pub fn json_error(status: StatusCode, msg: &str) -> Response {
    (status, Json(ErrorBody::new(msg, status.as_u16()))).into_response()
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidParameters("page".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::EndpointNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::EndpointNotFound.message(), messages::ENDPOINT_NOT_FOUND);
        assert_eq!(ApiError::ArtistNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::SongNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::ServiceUnavailable("500".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::MalformedUpstream("missing field".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("bug".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = ApiError::MalformedUpstream("missing field `sections`".into());
        assert_eq!(err.message(), messages::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_status_matches_body() {
        let response = ApiError::SongNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
