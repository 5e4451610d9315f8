//! Upstream JSON payloads
//!
//! Only the fields the proxy reads are modelled. Every upstream body wraps its
//! payload in a top-level `response` object.

use serde::Deserialize;
use serde_json::Value;

/// `{"response": ...}` wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub response: T,
}

/// Search-by-name payload
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPayload {
    /// Result sections; only the first is used
    pub sections: Vec<SearchSection>,
    /// Upstream pagination cursor
    #[serde(default)]
    pub next_page: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub result: ArtistHit,
}

/// Artist as returned inside a search hit
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistHit {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub is_verified: Option<bool>,
}

/// Artist-by-id payload
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistPayload {
    pub artist: ArtistRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRecord {
    pub name: String,
    pub image_url: String,
    pub description_preview: Option<String>,
    pub alternate_names: Option<Vec<String>>,
    pub facebook_name: Option<String>,
    pub instagram_name: Option<String>,
    pub twitter_name: Option<String>,
    pub is_verified: Option<bool>,
}

/// Songs-by-artist payload
#[derive(Debug, Clone, Deserialize)]
pub struct SongsPayload {
    pub songs: Vec<SongRecord>,
    #[serde(default)]
    pub next_page: Option<Value>,
}

/// Song-by-id payload
#[derive(Debug, Clone, Deserialize)]
pub struct SongPayload {
    pub song: SongRecord,
}

/// Song as returned by both the listing and the lookup endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SongRecord {
    pub id: i64,
    pub title_with_featured: String,
    pub artist_names: String,
    pub song_art_image_url: String,
    pub primary_artist: PrimaryArtist,
}

/// Principal credit on a song
#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryArtist {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub is_verified: Option<bool>,
}
