//! Shared HTTP API types
//!
//! Response envelopes and client-facing messages. Framework-free so the
//! service crate decides how they are rendered.

pub mod messages;
pub mod types;

pub use types::{DataResponse, ErrorBody, PagedResponse};
