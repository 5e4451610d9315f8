//! Upstream call policy
//!
//! Every upstream call is classified by status code before its body is
//! touched. The same rules apply to each call a handler makes.

use reqwest::StatusCode;

use crate::error::{ApiError, ApiResult};

/// Upstream resources the proxy consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Search-by-name
    ArtistSearch,
    /// Artist by id
    Artist,
    /// Songs by artist id
    ArtistSongs,
    /// Song metadata by id
    Song,
    /// Lyrics HTML page by song id
    LyricsPage,
}

impl Resource {
    pub fn label(self) -> &'static str {
        match self {
            Resource::ArtistSearch => "artist search",
            Resource::Artist => "artist",
            Resource::ArtistSongs => "artist songs",
            Resource::Song => "song",
            Resource::LyricsPage => "lyrics page",
        }
    }

    /// Error reported when upstream answers 404
    ///
    /// Only id-keyed lookups have a meaningful "not found". A 404 from the
    /// search endpoint means the endpoint itself is gone.
    fn not_found(self) -> Option<ApiError> {
        match self {
            Resource::ArtistSearch => None,
            Resource::Artist | Resource::ArtistSongs => Some(ApiError::ArtistNotFound),
            Resource::Song | Resource::LyricsPage => Some(ApiError::SongNotFound),
        }
    }
}

/// Classification of an upstream status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Success,
    NotFound,
    Unavailable,
}

/// Classify an upstream status for the given resource
///
/// Only 200 counts as success.
pub fn classify(resource: Resource, status: StatusCode) -> CallOutcome {
    if status == StatusCode::OK {
        CallOutcome::Success
    } else if status == StatusCode::NOT_FOUND && resource.not_found().is_some() {
        CallOutcome::NotFound
    } else {
        CallOutcome::Unavailable
    }
}

/// Apply the policy, turning anything but success into the handler's error
pub fn check_status(resource: Resource, status: StatusCode) -> ApiResult<()> {
    match classify(resource, status) {
        CallOutcome::Success => Ok(()),
        CallOutcome::NotFound => Err(resource
            .not_found()
            .unwrap_or_else(|| unavailable(resource, status))),
        CallOutcome::Unavailable => Err(unavailable(resource, status)),
    }
}

fn unavailable(resource: Resource, status: StatusCode) -> ApiError {
    ApiError::ServiceUnavailable(format!(
        "{} request returned {}",
        resource.label(),
        status.as_u16()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_KEYED: [Resource; 4] = [
        Resource::Artist,
        Resource::ArtistSongs,
        Resource::Song,
        Resource::LyricsPage,
    ];

    #[test]
    fn test_ok_is_success_everywhere() {
        for resource in ID_KEYED.into_iter().chain([Resource::ArtistSearch]) {
            assert_eq!(classify(resource, StatusCode::OK), CallOutcome::Success);
            assert!(check_status(resource, StatusCode::OK).is_ok());
        }
    }

    #[test]
    fn test_not_found_for_id_keyed_lookups() {
        for resource in ID_KEYED {
            assert_eq!(classify(resource, StatusCode::NOT_FOUND), CallOutcome::NotFound);
        }

        assert!(matches!(
            check_status(Resource::Artist, StatusCode::NOT_FOUND),
            Err(ApiError::ArtistNotFound)
        ));
        assert!(matches!(
            check_status(Resource::ArtistSongs, StatusCode::NOT_FOUND),
            Err(ApiError::ArtistNotFound)
        ));
        assert!(matches!(
            check_status(Resource::Song, StatusCode::NOT_FOUND),
            Err(ApiError::SongNotFound)
        ));
        assert!(matches!(
            check_status(Resource::LyricsPage, StatusCode::NOT_FOUND),
            Err(ApiError::SongNotFound)
        ));
    }

    #[test]
    fn test_search_not_found_is_unavailable() {
        assert_eq!(
            classify(Resource::ArtistSearch, StatusCode::NOT_FOUND),
            CallOutcome::Unavailable
        );
        assert!(matches!(
            check_status(Resource::ArtistSearch, StatusCode::NOT_FOUND),
            Err(ApiError::ServiceUnavailable(_))
        ));
    }

    #[test]
    fn test_other_statuses_are_unavailable() {
        let statuses = [
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::UNAUTHORIZED,
            StatusCode::NO_CONTENT,
            StatusCode::MOVED_PERMANENTLY,
        ];

        for resource in ID_KEYED {
            for status in statuses {
                assert_eq!(classify(resource, status), CallOutcome::Unavailable);
                assert!(matches!(
                    check_status(resource, status),
                    Err(ApiError::ServiceUnavailable(_))
                ));
            }
        }
    }
}
