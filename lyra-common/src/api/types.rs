//! Response envelopes
//!
//! Every payload carries its own `status` field mirroring the HTTP status:
//!
//! ```json
//! {"data": {...}, "status": 200}
//! {"data": [...], "next_page": 2, "status": 200}
//! {"msg": "Artist not found.", "status": 404}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success payload without pagination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
    pub status: u16,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { data, status: 200 }
    }
}

/// Success payload for paginated upstream listings
///
/// `next_page` is the upstream cursor echoed verbatim (usually an integer or
/// null). It is always serialized, as `null` when upstream has no next page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: T,
    pub next_page: Option<Value>,
    pub status: u16,
}

impl<T> PagedResponse<T> {
    pub fn ok(data: T, next_page: Option<Value>) -> Self {
        Self {
            data,
            next_page,
            status: 200,
        }
    }
}

/// Error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub msg: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>, status: u16) -> Self {
        Self {
            msg: msg.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paged_response_serializes_null_cursor() {
        let body = serde_json::to_value(PagedResponse::ok(Vec::<u8>::new(), None)).unwrap();
        assert_eq!(body, json!({"data": [], "next_page": null, "status": 200}));
    }

    #[test]
    fn test_paged_response_echoes_cursor() {
        let body = serde_json::to_value(PagedResponse::ok(1, Some(json!(3)))).unwrap();
        assert_eq!(body["next_page"], 3);
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorBody::new("Song not found.", 404)).unwrap();
        assert_eq!(body, json!({"msg": "Song not found.", "status": 404}));
    }
}
