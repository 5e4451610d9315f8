//! # Lyra Common Library
//!
//! Shared code for the Lyra lyrics proxy:
//! - Configuration loading (TOML bootstrap file + overrides)
//! - Error types
//! - JSON response envelopes and client-facing messages

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
