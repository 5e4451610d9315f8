//! Request parameter validation
//!
//! Runs before any upstream call. Bad query values are reported as
//! [`ApiError::InvalidParameters`]; a path id that is not an integer means no
//! route matched and is reported as [`ApiError::EndpointNotFound`].

use axum::extract::{rejection::PathRejection, Path};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::mapping::title_case;

/// Query string for `GET /artist`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub page: Option<String>,
}

/// Query string for `GET /artist/:id/songs`
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Validate the search name and title-case it
pub fn parse_name(raw: Option<&str>) -> ApiResult<String> {
    match raw {
        Some(name) if !name.is_empty() => Ok(title_case(name)),
        Some(_) => Err(ApiError::InvalidParameters("name is empty".to_string())),
        None => Err(ApiError::InvalidParameters("name is missing".to_string())),
    }
}

/// Parse an optional page number
///
/// Absent → 1. Present values must be integers; zero and negative pages are
/// clamped to 1.
pub fn parse_page(raw: Option<&str>) -> ApiResult<i64> {
    let Some(raw) = raw else {
        return Ok(1);
    };

    let page: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidParameters(format!("page '{}' is not an integer", raw)))?;

    Ok(page.max(1))
}

/// Extract and parse the `:id` path segment
pub fn path_id(path: Result<Path<String>, PathRejection>) -> ApiResult<i64> {
    let Path(raw) = path.map_err(|e| {
        tracing::debug!(detail = %e.body_text(), "Path segment rejected");
        ApiError::EndpointNotFound
    })?;
    parse_id(&raw)
}

/// Parse a path id; range checks are left to each route
///
/// Only an optional leading `-` followed by ASCII digits is accepted, so `+5`,
/// `5.0` and values outside `i64` do not match any route.
pub fn parse_id(raw: &str) -> ApiResult<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::EndpointNotFound);
    }

    raw.parse().map_err(|_| ApiError::EndpointNotFound)
}
