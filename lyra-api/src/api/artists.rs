//! Artist endpoints
//!
//! - `GET /artist?name=..&page=..` search by name
//! - `GET /artist/:id` artist detail
//! - `GET /artist/:id/songs?page=..` songs credited to the artist

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use lyra_common::api::{DataResponse, PagedResponse};
use tracing::info;

use super::params::{path_id, parse_name, parse_page, PageQuery, SearchQuery};
use crate::error::{ApiError, ApiResult};
use crate::mapping;
use crate::models::{ArtistDetail, ArtistSongs, ArtistSummary};
use crate::AppState;

/// GET /artist
///
/// Searches upstream by title-cased name and returns the first result
/// section. No hits is reported as "Artist not found.".
pub async fn search_artists(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<PagedResponse<Vec<ArtistSummary>>>> {
    let Query(query) = query.map_err(|e| ApiError::InvalidParameters(e.body_text()))?;
    let name = parse_name(query.name.as_deref())?;
    let page = parse_page(query.page.as_deref())?;

    let payload = state.upstream.search_artists(&name, page).await?;
    let (artists, next_page) = mapping::artist_summaries(payload)?;

    info!(name = %name, page, hits = artists.len(), "Artist search");
    Ok(Json(PagedResponse::ok(artists, next_page)))
}

/// GET /artist/:id
///
/// Ids ≤ 0 are rejected as invalid parameters.
pub async fn get_artist(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DataResponse<ArtistDetail>>> {
    let id = path_id(path)?;
    if id <= 0 {
        return Err(ApiError::InvalidParameters(format!("artist id {} is not positive", id)));
    }

    let record = state.upstream.artist(id).await?;
    let artist = mapping::artist_detail(id, record);

    info!(id, name = %artist.name, "Artist detail");
    Ok(Json(DataResponse::ok(artist)))
}

/// GET /artist/:id/songs
///
/// Ids ≤ 0 are reported as "Artist not found.". Songs whose primary artist
/// is someone else are filtered out.
pub async fn get_artist_songs(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<PagedResponse<ArtistSongs>>> {
    let id = path_id(path)?;
    if id <= 0 {
        return Err(ApiError::ArtistNotFound);
    }

    let Query(query) = query.map_err(|e| ApiError::InvalidParameters(e.body_text()))?;
    let page = parse_page(query.page.as_deref())?;

    let payload = state.upstream.artist_songs(id, page).await?;
    let next_page = payload.next_page.clone();
    let songs = mapping::artist_songs(id, payload.songs);

    info!(id, page, songs = songs.songs.len(), "Artist songs");
    Ok(Json(PagedResponse::ok(songs, next_page)))
}
