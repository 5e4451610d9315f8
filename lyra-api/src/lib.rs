//! lyra-api library - lyrics and artist metadata proxy
//!
//! Aggregates an upstream music-metadata JSON API and its HTML lyrics pages
//! into a small JSON API. Stateless: nothing is cached or persisted between
//! requests.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use lyra_common::config::UpstreamConfig;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod lyrics;
pub mod mapping;
pub mod models;
pub mod upstream;

use error::ApiResult;
use upstream::UpstreamClient;

/// Application state shared across HTTP handlers
///
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: UpstreamConfig) -> ApiResult<Self> {
        Ok(Self {
            upstream: Arc::new(UpstreamClient::new(config)?),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::serve_index))
        .route("/artist", get(api::search_artists))
        .route("/artist/:id", get(api::get_artist))
        .route("/artist/:id/songs", get(api::get_artist_songs))
        .route("/song/:id", get(api::get_song))
        .merge(api::health_routes())
        .fallback(api::endpoint_not_found)
        .layer(middleware::map_response(api::method_not_allowed_json))
        .layer(CatchPanicLayer::custom(api::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
