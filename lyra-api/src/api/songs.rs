//! Song endpoint
//!
//! `GET /song/:id` stitches the song metadata and the scraped lyrics page
//! into one record. The two upstream calls are made in order and each is
//! checked before going on.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use lyra_common::api::DataResponse;
use tracing::info;

use super::params::path_id;
use crate::error::{ApiError, ApiResult};
use crate::models::SongDetail;
use crate::{lyrics, mapping, AppState};

/// GET /song/:id
///
/// Ids ≤ 0 are reported as "Song not found.".
pub async fn get_song(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DataResponse<SongDetail>>> {
    let song_id = path_id(path)?;
    if song_id <= 0 {
        return Err(ApiError::SongNotFound);
    }

    let record = state.upstream.song(song_id).await?;
    let mut song = mapping::song_detail(song_id, record);

    let html = state.upstream.lyrics_page(song_id).await?;
    song.song_lyrics = lyrics::extract_lyrics(&html)?;

    info!(
        song_id,
        title = %song.full_title,
        lines = song.song_lyrics.len(),
        "Song with lyrics"
    );
    Ok(Json(DataResponse::ok(song)))
}
