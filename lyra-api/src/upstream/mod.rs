//! Upstream metadata and lyrics client
//!
//! One `reqwest::Client` is shared by all requests. Its timeout bounds each
//! call from connect to the end of the body; a timeout or any transport
//! failure is reported as [`ApiError::ServiceUnavailable`]. There are no
//! retries.

pub mod models;
pub mod policy;

use lyra_common::config::UpstreamConfig;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use models::{
    ArtistPayload, ArtistRecord, Envelope, SearchPayload, SongPayload, SongRecord, SongsPayload,
};
use policy::{check_status, Resource};

const USER_AGENT: &str = concat!("lyra/", env!("CARGO_PKG_VERSION"));

/// Client for the five upstream endpoints
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Search artists by (already title-cased) name
    pub async fn search_artists(&self, name: &str, page: i64) -> ApiResult<SearchPayload> {
        let url = search_url(&self.config.search_artist_url, name, page)?;
        self.fetch_json(Resource::ArtistSearch, url).await
    }

    /// Look up a single artist
    pub async fn artist(&self, id: i64) -> ApiResult<ArtistRecord> {
        let url = id_url(&self.config.artist_url, id)?;
        let payload: ArtistPayload = self.fetch_json(Resource::Artist, url).await?;
        Ok(payload.artist)
    }

    /// List an artist's songs, most popular first
    pub async fn artist_songs(&self, id: i64, page: i64) -> ApiResult<SongsPayload> {
        let url = artist_songs_url(&self.config.artist_url, id, page)?;
        self.fetch_json(Resource::ArtistSongs, url).await
    }

    /// Look up song metadata
    pub async fn song(&self, id: i64) -> ApiResult<SongRecord> {
        let url = id_url(&self.config.song_url, id)?;
        let payload: SongPayload = self.fetch_json(Resource::Song, url).await?;
        Ok(payload.song)
    }

    /// Fetch the raw lyrics HTML page for a song
    pub async fn lyrics_page(&self, id: i64) -> ApiResult<String> {
        let url = id_url(&self.config.lyrics_url, id)?;
        let response = self.fetch(Resource::LyricsPage, url).await?;

        response.text().await.map_err(|e| {
            ApiError::ServiceUnavailable(format!("lyrics page body could not be read: {}", e))
        })
    }

    async fn fetch(&self, resource: Resource, url: Url) -> ApiResult<reqwest::Response> {
        debug!(resource = resource.label(), url = %url, "Querying upstream");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "failed" };
                ApiError::ServiceUnavailable(format!("{} request {}: {}", resource.label(), kind, e))
            })?;

        let status = response.status();
        debug!(resource = resource.label(), status = status.as_u16(), "Upstream responded");
        check_status(resource, status)?;

        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: Resource, url: Url) -> ApiResult<T> {
        let response = self.fetch(resource, url).await?;

        let body = response.bytes().await.map_err(|e| {
            ApiError::ServiceUnavailable(format!(
                "{} body could not be read: {}",
                resource.label(),
                e
            ))
        })?;

        let envelope: Envelope<T> = serde_json::from_slice(&body).map_err(|e| {
            ApiError::MalformedUpstream(format!("{} payload: {}", resource.label(), e))
        })?;

        Ok(envelope.response)
    }
}

/// `{base}?q={name}&page={page}`
pub fn search_url(base: &str, name: &str, page: i64) -> ApiResult<Url> {
    let page = page.to_string();
    Url::parse_with_params(base, &[("q", name), ("page", page.as_str())])
        .map_err(|e| invalid_base(base, e))
}

/// `{base}/{id}`
pub fn id_url(base: &str, id: i64) -> ApiResult<Url> {
    let raw = format!("{}/{}", base, id);
    Url::parse(&raw).map_err(|e| invalid_base(base, e))
}

/// `{base}/{id}/songs?sort=popularity&page={page}`
pub fn artist_songs_url(base: &str, id: i64, page: i64) -> ApiResult<Url> {
    let raw = format!("{}/{}/songs", base, id);
    let page = page.to_string();
    Url::parse_with_params(&raw, &[("sort", "popularity"), ("page", page.as_str())])
        .map_err(|e| invalid_base(base, e))
}

fn invalid_base(base: &str, e: impl std::fmt::Display) -> ApiError {
    ApiError::Internal(format!("invalid upstream URL {}: {}", base, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_default_page() {
        let url = search_url("https://api.example.com/search/artist", "Drake", 1).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/search/artist?q=Drake&page=1");
    }

    #[test]
    fn test_search_url_encodes_name() {
        let url = search_url("https://api.example.com/search", "Bad Bunny & Co", 2).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/search?q=Bad+Bunny+%26+Co&page=2");
    }

    #[test]
    fn test_id_url() {
        let url = id_url("https://api.example.com/artists", 130).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/artists/130");
    }

    #[test]
    fn test_artist_songs_url() {
        let url = artist_songs_url("https://api.example.com/artists", 130, 3).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/artists/130/songs?sort=popularity&page=3"
        );
    }

    #[test]
    fn test_invalid_base_is_internal() {
        assert!(matches!(id_url("not a url", 1), Err(ApiError::Internal(_))));
    }
}
