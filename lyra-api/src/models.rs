//! Records returned to API clients

use serde::Serialize;

/// One artist search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: i64,
    /// `None` when upstream only has its placeholder image
    pub image: Option<String>,
    pub name: String,
    pub verified: Option<bool>,
}

/// Full artist record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub description: Option<String>,
    pub id: i64,
    pub image: Option<String>,
    pub name: String,
    pub nicknames: Option<Vec<String>>,
    /// `None` when the artist has no social handles at all
    pub social_media: Option<SocialMedia>,
    pub verified: Option<bool>,
}

/// Profile URLs derived from upstream social handles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

/// Songs credited to one artist, with that artist's header fields
///
/// Header fields are taken from the first song kept after filtering and are
/// `None` when no song survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSongs {
    pub id: i64,
    pub image: Option<String>,
    pub name: Option<String>,
    pub songs: Vec<SongSummary>,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongSummary {
    pub artists: String,
    pub full_title: String,
    pub song_id: i64,
    pub song_image: String,
    pub title: String,
}

/// Song metadata plus its lyric lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongDetail {
    pub artists: String,
    pub full_title: String,
    pub main_artist: MainArtist,
    pub song_id: i64,
    pub song_image: String,
    pub song_lyrics: Vec<String>,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainArtist {
    pub id: i64,
    pub image: String,
    pub name: String,
    pub verified: Option<bool>,
}
