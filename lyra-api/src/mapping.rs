//! Upstream payload → client record mapping
//!
//! Empty or placeholder upstream values become `None` so clients only have
//! to check for null.

use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    ArtistDetail, ArtistSongs, ArtistSummary, MainArtist, SocialMedia, SongDetail, SongSummary,
};
use crate::upstream::models::{ArtistRecord, SearchPayload, SongRecord};

/// Substring upstream uses in its placeholder image URLs
pub const DEFAULT_IMAGE_MARKER: &str = "default";

const FACEBOOK_URL: &str = "https://www.facebook.com/";
const INSTAGRAM_URL: &str = "https://www.instagram.com/";
const TWITTER_URL: &str = "https://twitter.com/";

/// Artist image, or `None` for upstream's placeholder
pub fn artist_image(url: &str) -> Option<String> {
    if url.contains(DEFAULT_IMAGE_MARKER) {
        None
    } else {
        Some(url.to_string())
    }
}

/// Title-case a search term
///
/// The first letter of every run of letters is upper-cased and the rest of
/// the run lower-cased, so `"the weeknd"` becomes `"The Weeknd"` and
/// `"ac/dc"` becomes `"Ac/Dc"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// `"{artist} - {title}"`
pub fn full_title(artist: &str, title: &str) -> String {
    format!("{} - {}", artist, title)
}

/// Map the first search section to artist summaries
///
/// Returns the summaries and upstream's `next_page` cursor.
pub fn artist_summaries(payload: SearchPayload) -> ApiResult<(Vec<ArtistSummary>, Option<Value>)> {
    let SearchPayload {
        sections,
        next_page,
    } = payload;

    let section = sections
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::MalformedUpstream("search payload has no sections".to_string()))?;

    if section.hits.is_empty() {
        return Err(ApiError::ArtistNotFound);
    }

    let artists = section
        .hits
        .into_iter()
        .map(|hit| ArtistSummary {
            id: hit.result.id,
            image: artist_image(&hit.result.image_url),
            name: hit.result.name,
            verified: hit.result.is_verified,
        })
        .collect();

    Ok((artists, next_page))
}

/// Map an artist record; `id` is the requested id
pub fn artist_detail(id: i64, record: ArtistRecord) -> ArtistDetail {
    ArtistDetail {
        description: non_empty(record.description_preview),
        id,
        image: artist_image(&record.image_url),
        name: record.name,
        nicknames: record.alternate_names.filter(|names| !names.is_empty()),
        social_media: social_media(
            record.facebook_name,
            record.instagram_name,
            record.twitter_name,
        ),
        verified: record.is_verified,
    }
}

/// Build profile URLs from social handles
///
/// Empty handles count as absent. Returns `None` when all three are absent.
pub fn social_media(
    facebook: Option<String>,
    instagram: Option<String>,
    twitter: Option<String>,
) -> Option<SocialMedia> {
    let facebook = non_empty(facebook).map(|handle| format!("{}{}", FACEBOOK_URL, handle));
    let instagram = non_empty(instagram).map(|handle| format!("{}{}", INSTAGRAM_URL, handle));
    let twitter = non_empty(twitter).map(|handle| format!("{}{}", TWITTER_URL, handle));

    if facebook.is_none() && instagram.is_none() && twitter.is_none() {
        return None;
    }

    Some(SocialMedia {
        facebook,
        instagram,
        twitter,
    })
}

/// Keep the songs whose primary artist is `artist_id`
///
/// Collaborations listed under another primary artist are dropped. The
/// header fields come from the first kept song.
pub fn artist_songs(artist_id: i64, songs: Vec<SongRecord>) -> ArtistSongs {
    let mut result = ArtistSongs {
        id: artist_id,
        image: None,
        name: None,
        songs: Vec::new(),
        verified: None,
    };

    for song in songs
        .into_iter()
        .filter(|song| song.primary_artist.id == artist_id)
    {
        if result.songs.is_empty() {
            result.image = Some(song.primary_artist.image_url.clone());
            result.name = Some(song.primary_artist.name.clone());
            result.verified = song.primary_artist.is_verified;
        }

        result.songs.push(SongSummary {
            artists: song.artist_names,
            full_title: full_title(&song.primary_artist.name, &song.title_with_featured),
            song_id: song.id,
            song_image: song.song_art_image_url,
            title: song.title_with_featured,
        });
    }

    result
}

/// Map song metadata; lyrics are filled in separately
pub fn song_detail(song_id: i64, record: SongRecord) -> SongDetail {
    let artist = record.primary_artist;

    SongDetail {
        artists: record.artist_names,
        full_title: full_title(&artist.name, &record.title_with_featured),
        main_artist: MainArtist {
            id: artist.id,
            image: artist.image_url,
            name: artist.name,
            verified: artist.is_verified,
        },
        song_id,
        song_image: record.song_art_image_url,
        song_lyrics: Vec::new(),
        title: record.title_with_featured,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::models::{ArtistHit, PrimaryArtist, SearchHit, SearchSection};
    use serde_json::json;

    fn primary(id: i64, name: &str) -> PrimaryArtist {
        PrimaryArtist {
            id,
            name: name.to_string(),
            image_url: format!("https://images.example.com/{}.jpg", id),
            is_verified: Some(true),
        }
    }

    fn song(id: i64, title: &str, artist: PrimaryArtist) -> SongRecord {
        SongRecord {
            id,
            title_with_featured: title.to_string(),
            artist_names: artist.name.clone(),
            song_art_image_url: format!("https://images.example.com/song-{}.jpg", id),
            primary_artist: artist,
        }
    }

    fn artist_record() -> ArtistRecord {
        ArtistRecord {
            name: "Drake".to_string(),
            image_url: "https://images.example.com/drake.jpg".to_string(),
            description_preview: Some("Canadian rapper".to_string()),
            alternate_names: Some(vec!["Drizzy".to_string()]),
            facebook_name: None,
            instagram_name: None,
            twitter_name: None,
            is_verified: Some(true),
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("drake"), "Drake");
        assert_eq!(title_case("the WEEKND"), "The Weeknd");
        assert_eq!(title_case("ac/dc"), "Ac/Dc");
        assert_eq!(title_case("2pac"), "2Pac");
        assert_eq!(title_case("guns n' roses"), "Guns N' Roses");
        assert_eq!(title_case("élodie"), "Élodie");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_artist_image_placeholder() {
        assert_eq!(artist_image("https://assets.example.com/images/default_avatar_300.png"), None);
        assert_eq!(
            artist_image("https://images.example.com/drake.jpg"),
            Some("https://images.example.com/drake.jpg".to_string())
        );
    }

    #[test]
    fn test_full_title_separator() {
        assert_eq!(full_title("Drake", "Hotline Bling"), "Drake - Hotline Bling");
    }

    #[test]
    fn test_artist_summaries_first_section_only() {
        let hit = |id: i64, image: &str| SearchHit {
            result: ArtistHit {
                id,
                name: format!("Artist {}", id),
                image_url: image.to_string(),
                is_verified: None,
            },
        };

        let payload = SearchPayload {
            sections: vec![
                SearchSection {
                    hits: vec![
                        hit(1, "https://images.example.com/1.jpg"),
                        hit(2, "https://assets.example.com/default_avatar.png"),
                    ],
                },
                SearchSection {
                    hits: vec![hit(3, "https://images.example.com/3.jpg")],
                },
            ],
            next_page: Some(json!(2)),
        };

        let (artists, next_page) = artist_summaries(payload).unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].image.as_deref(), Some("https://images.example.com/1.jpg"));
        assert_eq!(artists[1].image, None);
        assert_eq!(artists[1].verified, None);
        assert_eq!(next_page, Some(json!(2)));
    }

    #[test]
    fn test_artist_summaries_no_hits() {
        let payload = SearchPayload {
            sections: vec![SearchSection { hits: vec![] }],
            next_page: None,
        };
        assert!(matches!(artist_summaries(payload), Err(ApiError::ArtistNotFound)));
    }

    #[test]
    fn test_artist_summaries_no_sections() {
        let payload = SearchPayload {
            sections: vec![],
            next_page: None,
        };
        assert!(matches!(artist_summaries(payload), Err(ApiError::MalformedUpstream(_))));
    }

    #[test]
    fn test_artist_detail_nulls_empty_values() {
        let record = ArtistRecord {
            description_preview: Some(String::new()),
            alternate_names: Some(vec![]),
            image_url: "https://assets.example.com/default_avatar.png".to_string(),
            ..artist_record()
        };

        let detail = artist_detail(130, record);
        assert_eq!(detail.id, 130);
        assert_eq!(detail.description, None);
        assert_eq!(detail.nicknames, None);
        assert_eq!(detail.image, None);
        assert_eq!(detail.social_media, None);
    }

    #[test]
    fn test_artist_detail_keeps_values() {
        let detail = artist_detail(130, artist_record());
        assert_eq!(detail.description.as_deref(), Some("Canadian rapper"));
        assert_eq!(detail.nicknames, Some(vec!["Drizzy".to_string()]));
        assert_eq!(detail.verified, Some(true));
    }

    #[test]
    fn test_social_media_partial() {
        let social = social_media(None, Some("champagnepapi".to_string()), Some(String::new()))
            .unwrap();
        assert_eq!(social.facebook, None);
        assert_eq!(
            social.instagram.as_deref(),
            Some("https://www.instagram.com/champagnepapi")
        );
        assert_eq!(social.twitter, None);
    }

    #[test]
    fn test_social_media_all_handles() {
        let social = social_media(
            Some("Drake".to_string()),
            Some("champagnepapi".to_string()),
            Some("Drake".to_string()),
        )
        .unwrap();
        assert_eq!(social.facebook.as_deref(), Some("https://www.facebook.com/Drake"));
        assert_eq!(social.twitter.as_deref(), Some("https://twitter.com/Drake"));
    }

    #[test]
    fn test_social_media_absent() {
        assert_eq!(social_media(None, None, None), None);
        assert_eq!(social_media(Some(String::new()), None, None), None);
    }

    #[test]
    fn test_artist_songs_filters_collaborations() {
        let songs = vec![
            song(1, "Hotline Bling", primary(130, "Drake")),
            song(2, "Work", primary(89, "Rihanna")),
            song(3, "God's Plan", primary(130, "Drake")),
        ];

        let result = artist_songs(130, songs);
        assert_eq!(result.songs.len(), 2);
        assert!(result.songs.iter().all(|s| s.full_title.starts_with("Drake - ")));
        assert_eq!(result.songs[1].full_title, "Drake - God's Plan");
        assert_eq!(result.name.as_deref(), Some("Drake"));
        assert_eq!(result.image.as_deref(), Some("https://images.example.com/130.jpg"));
        assert_eq!(result.verified, Some(true));
    }

    #[test]
    fn test_artist_songs_header_from_first_kept_song() {
        let songs = vec![
            song(2, "Work", primary(89, "Rihanna")),
            song(1, "Hotline Bling", primary(130, "Drake")),
        ];

        let result = artist_songs(130, songs);
        assert_eq!(result.songs.len(), 1);
        assert_eq!(result.name.as_deref(), Some("Drake"));
    }

    #[test]
    fn test_artist_songs_empty_after_filter() {
        let result = artist_songs(130, vec![song(2, "Work", primary(89, "Rihanna"))]);
        assert!(result.songs.is_empty());
        assert_eq!(result.id, 130);
        assert_eq!(result.name, None);
        assert_eq!(result.image, None);
        assert_eq!(result.verified, None);
    }

    #[test]
    fn test_song_detail() {
        let detail = song_detail(2, song(2, "Work (Ft. Drake)", primary(89, "Rihanna")));
        assert_eq!(detail.song_id, 2);
        assert_eq!(detail.full_title, "Rihanna - Work (Ft. Drake)");
        assert_eq!(detail.main_artist.id, 89);
        assert!(detail.song_lyrics.is_empty());
    }
}
