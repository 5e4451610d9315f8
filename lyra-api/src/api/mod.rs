//! HTTP API handlers for lyra-api

pub mod artists;
pub mod fallback;
pub mod health;
pub mod params;
pub mod songs;
pub mod ui;

pub use artists::{get_artist, get_artist_songs, search_artists};
pub use fallback::{endpoint_not_found, method_not_allowed_json, panic_response};
pub use health::health_routes;
pub use songs::get_song;
pub use ui::serve_index;
